//! Tone profiles and the built-in presets.

use serde::{Deserialize, Serialize};

use crate::conversations::core::config::ToneBounds;

/// Five-dimension descriptor of the desired reply style.
///
/// Values are conventionally in `1..=10` (the slider range) but the store
/// accepts whatever it is given.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToneProfile {
    /// How light-hearted replies should be.
    pub playfulness: f64,
    /// How formal replies should be.
    pub formality: f64,
    /// How direct replies should be about making plans.
    pub forwardness: f64,
    /// How much emotion replies should show.
    pub expressiveness: f64,
    /// How flirtatious replies should be.
    pub flirtation: f64,
}

impl ToneProfile {
    /// Build a profile from its five dimensions, in canonical order.
    #[must_use]
    pub const fn new(
        playfulness: f64,
        formality: f64,
        forwardness: f64,
        expressiveness: f64,
        flirtation: f64,
    ) -> Self {
        Self {
            playfulness,
            formality,
            forwardness,
            expressiveness,
            flirtation,
        }
    }

    /// Dimensions rounded to the nearest integer, in canonical order.
    #[must_use]
    pub fn rounded(&self) -> [i64; 5] {
        [
            round_dimension(self.playfulness),
            round_dimension(self.formality),
            round_dimension(self.forwardness),
            round_dimension(self.expressiveness),
            round_dimension(self.flirtation),
        ]
    }

    /// Copy with every dimension clamped into `bounds`.
    ///
    /// NaN dimensions collapse to `bounds.min`.
    #[must_use]
    pub fn clamped(&self, bounds: &ToneBounds) -> Self {
        let clamp = |value: f64| {
            if value.is_nan() {
                bounds.min
            } else {
                value.max(bounds.min).min(bounds.max)
            }
        };
        Self {
            playfulness: clamp(self.playfulness),
            formality: clamp(self.formality),
            forwardness: clamp(self.forwardness),
            expressiveness: clamp(self.expressiveness),
            flirtation: clamp(self.flirtation),
        }
    }

    /// Short label such as `P7 F3 Fw6 E7 Fl7`.
    #[must_use]
    pub fn describe(&self) -> String {
        let [p, f, fw, e, fl] = self.rounded();
        format!("P{p} F{f} Fw{fw} E{e} Fl{fl}")
    }

    /// Hint appended to suggestion rationales, e.g. `Tone: P7/F3/Fw6/E7/Fl7.`
    #[must_use]
    pub fn hint(&self) -> String {
        let [p, f, fw, e, fl] = self.rounded();
        format!("Tone: P{p}/F{f}/Fw{fw}/E{e}/Fl{fl}.")
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_dimension(value: f64) -> i64 {
    // Saturating cast; NaN becomes 0.
    value.round() as i64
}

/// A named, quick-apply tone.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TonePreset {
    /// Display name.
    pub name: &'static str,
    /// Profile applied when the preset is picked.
    pub profile: ToneProfile,
}

static PRESETS: [TonePreset; 5] = [
    TonePreset {
        name: "Playful & Flirty",
        profile: ToneProfile::new(8.0, 3.0, 7.0, 8.0, 8.0),
    },
    TonePreset {
        name: "Thoughtful & Deep",
        profile: ToneProfile::new(3.0, 6.0, 4.0, 5.0, 2.0),
    },
    TonePreset {
        name: "Casual & Friendly",
        profile: ToneProfile::new(5.0, 2.0, 5.0, 6.0, 4.0),
    },
    TonePreset {
        name: "Direct & Bold",
        profile: ToneProfile::new(4.0, 5.0, 9.0, 7.0, 5.0),
    },
    TonePreset {
        name: "Professional & Warm",
        profile: ToneProfile::new(3.0, 7.0, 5.0, 4.0, 1.0),
    },
];

/// The built-in presets, in display order.
#[must_use]
pub fn presets() -> &'static [TonePreset] {
    &PRESETS
}

/// Look up a preset by its exact display name.
#[must_use]
pub fn preset_named(name: &str) -> Option<&'static TonePreset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

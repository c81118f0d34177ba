//! Configuration for the conversation store.

use serde::{Deserialize, Serialize};

use crate::conversations::core::errors::{ToneHoneError, ToneHoneResult};

/// Environment variable overriding [`EventConfig::capacity`].
pub const ENV_EVENT_CAPACITY: &str = "TONEHONE_EVENT_CAPACITY";

/// Environment variable toggling [`SeedConfig::enabled`].
pub const ENV_SEED: &str = "TONEHONE_SEED";

/// Largest accepted [`EventConfig::capacity`].
pub const MAX_EVENT_CAPACITY: usize = 1 << 16;

/// Top-level configuration for the conversation store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Change-notification settings.
    pub events: EventConfig,
    /// Slider range for tone dimensions.
    pub tone: ToneBounds,
    /// Initial fixture settings.
    pub seed: SeedConfig,
}

impl StoreConfig {
    /// Defaults overlaid with `TONEHONE_*` environment variables.
    ///
    /// Values that fail to parse keep their default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values returned by `lookup` for the
    /// `TONEHONE_*` keys.
    ///
    /// Values that fail to parse keep their default.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = lookup(ENV_EVENT_CAPACITY).and_then(|raw| raw.trim().parse().ok()) {
            config.events.capacity = capacity;
        }

        if let Some(enabled) = lookup(ENV_SEED).as_deref().and_then(parse_flag) {
            config.seed.enabled = enabled;
        }

        config
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range or invalid.
    pub fn validate(&self) -> ToneHoneResult<()> {
        if self.events.capacity == 0 {
            return Err(ToneHoneError::InvalidConfig(
                "events.capacity must be > 0".to_string(),
            ));
        }

        if self.events.capacity > MAX_EVENT_CAPACITY {
            return Err(ToneHoneError::InvalidConfig(format!(
                "events.capacity must be <= {MAX_EVENT_CAPACITY}"
            )));
        }

        if !self.tone.min.is_finite() || !self.tone.max.is_finite() {
            return Err(ToneHoneError::InvalidConfig(
                "tone bounds must be finite".to_string(),
            ));
        }

        if self.tone.min > self.tone.max {
            return Err(ToneHoneError::InvalidConfig(format!(
                "tone.min ({}) must be <= tone.max ({})",
                self.tone.min, self.tone.max
            )));
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Change-notification settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventConfig {
    /// Buffered events per subscriber before the oldest are dropped.
    pub capacity: usize,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Inclusive range offered by the tone sliders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToneBounds {
    /// Lowest accepted value.
    pub min: f64,
    /// Highest accepted value.
    pub max: f64,
}

impl Default for ToneBounds {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 10.0,
        }
    }
}

/// Initial fixture settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Start with the canonical "Sarah on Hinge" conversation.
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

//! Canned reply templates.
//!
//! Text, score and variant are fixed; context and tone only show up in the
//! rationale.

use crate::conversations::core::ids::SuggestionId;
use crate::conversations::core::suggestion::{Suggestion, SuggestionVariant};
use crate::conversations::core::tone::ToneProfile;
use crate::conversations::ports::id_gen::IdGenerator;

/// One fixed reply template.
#[derive(Clone, Copy, Debug)]
pub struct SuggestionTemplate {
    /// Reply text.
    pub text: &'static str,
    /// Base match score.
    pub match_score: u8,
    /// Rationale before any hints are appended.
    pub rationale: &'static str,
    /// Style tag.
    pub variant: SuggestionVariant,
}

/// The four base templates, in display order.
pub const BASE_TEMPLATES: [SuggestionTemplate; 4] = [
    SuggestionTemplate {
        text: "That's awesome! I usually do Runyon Canyon\u{2014}are you more of a sunrise or afternoon hiker?",
        match_score: 95,
        rationale: "Builds on hiking, matches playful tone, invites engagement.",
        variant: SuggestionVariant::Question,
    },
    SuggestionTemplate {
        text: "Love that. We should hit a trail together this week\u{2014}I've got a spot with a great view.",
        match_score: 84,
        rationale: "More forward, suggests a plan.",
        variant: SuggestionVariant::Bold,
    },
    SuggestionTemplate {
        text: "Hiking sounds perfect. What kind of terrain do you enjoy most?",
        match_score: 90,
        rationale: "Keeps conversation moving, invites them to share preference.",
        variant: SuggestionVariant::Safe,
    },
    SuggestionTemplate {
        text: "Teach me your favorite trail\u{2014}I\u{2019}ll bring the coffee.",
        match_score: 92,
        rationale: "Playful promise, light escalation.",
        variant: SuggestionVariant::Playful,
    },
];

/// Build the rationale suffix for the given context and tone.
///
/// Empty when there is no context and no tone. The context hint always
/// precedes the tone hint.
#[must_use]
pub fn rationale_suffix(context: &str, tone: Option<&ToneProfile>) -> String {
    let mut suffix = String::new();
    if !context.is_empty() {
        suffix.push_str(" Based on: \"");
        suffix.push_str(context);
        suffix.push('"');
    }
    if let Some(tone) = tone {
        suffix.push(' ');
        suffix.push_str(&tone.hint());
    }
    suffix
}

/// Produce the four suggestions for `context` and `tone`.
///
/// Deterministic apart from the ids, which come fresh from `ids`.
#[must_use]
pub fn build_suggestions(
    context: &str,
    tone: Option<&ToneProfile>,
    ids: &dyn IdGenerator,
) -> Vec<Suggestion> {
    let suffix = rationale_suffix(context, tone);
    BASE_TEMPLATES
        .iter()
        .map(|template| Suggestion {
            id: SuggestionId::from(ids.next_uuid()),
            text: template.text.to_string(),
            match_score: template.match_score,
            rationale: format!("{}{suffix}", template.rationale),
            variant: template.variant,
        })
        .collect()
}

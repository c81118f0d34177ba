//! Reply suggestion model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::conversations::core::ids::SuggestionId;

/// Categorical style tag on a suggestion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionVariant {
    /// Low-risk, neutral reply.
    Safe,
    /// Forward reply that pushes toward a plan.
    Bold,
    /// Light, teasing reply.
    Playful,
    /// Reply built around a question.
    Question,
    /// Plain statement.
    Statement,
}

impl SuggestionVariant {
    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Bold => "bold",
            Self::Playful => "playful",
            Self::Question => "question",
            Self::Statement => "statement",
        }
    }
}

impl fmt::Display for SuggestionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate reply with its score and explanation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique within the current suggestion set.
    pub id: SuggestionId,
    /// Reply text.
    pub text: String,
    /// Advisory match score, 0-100.
    pub match_score: u8,
    /// Why this reply fits, plus any context/tone hints.
    pub rationale: String,
    /// Style tag.
    pub variant: SuggestionVariant,
}

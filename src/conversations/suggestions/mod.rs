//! Suggestion templating and tone preview.

pub mod preview;
pub mod templates;

pub use preview::{PREVIEW_INPUT, preview_reply};
pub use templates::{BASE_TEMPLATES, SuggestionTemplate, build_suggestions, rationale_suffix};

//! Core conversation types and identifiers.

pub mod config;
pub mod errors;
pub mod ids;
pub mod model;
pub mod suggestion;
pub mod tone;

pub use config::{EventConfig, SeedConfig, StoreConfig, ToneBounds};
pub use errors::{ToneHoneError, ToneHoneResult};
pub use ids::{ConversationId, MessageId, PersonId, SuggestionId};
pub use model::{Conversation, Message, MessageSender, Person};
pub use suggestion::{Suggestion, SuggestionVariant};
pub use tone::{TonePreset, ToneProfile, preset_named, presets};

//! Conversation subsystem for the `ToneHone` assistant.
//!
//! This module is organized into:
//! - `core`: Configuration, errors, IDs, tone profiles, and the domain model
//! - `ports`: Clock, id generator and clipboard abstractions
//! - `suggestions`: Reply templating and tone preview
//! - `engine`: The conversation store, bindings, events and snapshots
//! - `adapters`: Tracing setup

pub mod adapters;
pub mod core;
pub mod engine;
pub mod ports;
pub mod suggestions;

// Re-export commonly used types for convenience
pub use adapters::init_tracing;
pub use self::core::{
    Conversation, ConversationId, EventConfig, Message, MessageId, MessageSender, Person,
    PersonId, SeedConfig, StoreConfig, Suggestion, SuggestionId, SuggestionVariant, ToneBounds,
    ToneHoneError, ToneHoneResult, TonePreset, ToneProfile, preset_named, presets,
};
pub use engine::{
    ConversationBinding, ConversationStore, EventBus, SEED_TONE, StoreBackends, StoreEvent,
    StoreSnapshot, seed_conversation,
};
pub use ports::{
    ClipboardSink, Clock, IdGenerator, ManualClock, MemoryClipboard, SequentialIds, SystemClock,
    UuidGenerator,
};
pub use suggestions::{PREVIEW_INPUT, build_suggestions, preview_reply};

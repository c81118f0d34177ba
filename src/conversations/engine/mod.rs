//! Conversation store orchestration.

pub mod binding;
pub mod events;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use binding::ConversationBinding;
pub use events::{EventBus, StoreEvent};
pub use seed::{SEED_TONE, seed_conversation};
pub use snapshot::StoreSnapshot;
pub use store::{ConversationStore, StoreBackends};

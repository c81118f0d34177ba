//! Serializable view of the store state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::conversations::core::errors::ToneHoneResult;
use crate::conversations::core::ids::ConversationId;
use crate::conversations::core::model::Conversation;
use crate::conversations::core::suggestion::Suggestion;

/// Point-in-time copy of everything the presentation layer observes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// All conversations.
    pub conversations: Vec<Conversation>,
    /// Displayed suggestions.
    pub suggestions: Vec<Suggestion>,
    /// Selected conversation id.
    pub selected_conversation_id: Option<ConversationId>,
    /// Context notes by conversation.
    pub context_notes: BTreeMap<ConversationId, String>,
}

impl StoreSnapshot {
    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> ToneHoneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

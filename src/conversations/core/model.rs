//! People, messages and conversations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::conversations::core::ids::{ConversationId, MessageId, PersonId};
use crate::conversations::core::tone::ToneProfile;

/// Who wrote a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    /// The app's user.
    User,
    /// The other party.
    Other,
    /// Generated by the assistant.
    Ai,
}

impl MessageSender {
    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Other => "other",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The other party of a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Opaque identity.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Platform label, e.g. "Hinge".
    pub platform: String,
    /// Avatar reference (symbol name or URL).
    pub avatar: String,
}

/// One message in a thread. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: MessageId,
    /// Author.
    pub sender: MessageSender,
    /// Message body.
    pub text: String,
    /// When the message was written.
    pub timestamp: DateTime<Utc>,
}

/// A thread with one person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique within the store.
    pub id: ConversationId,
    /// Who the thread is with.
    pub person: Person,
    /// Messages in append (chronological) order.
    pub messages: Vec<Message>,
    /// Reply style for this thread.
    pub tone_profile: ToneProfile,
    /// The other party is waiting on a reply.
    pub needs_response: bool,
    /// Time of the last append.
    pub last_activity: DateTime<Utc>,
    /// Badge shown next to the thread.
    pub platform_badge: String,
    /// Unread incoming messages.
    pub unread_count: u32,
    /// Advisory health indicator.
    pub health_score: i32,
}

impl Conversation {
    /// Most recent message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Append an outgoing message and mark the thread as answered.
    pub(crate) fn push_outgoing(&mut self, message: Message) {
        self.last_activity = message.timestamp;
        self.needs_response = false;
        self.messages.push(message);
    }
}

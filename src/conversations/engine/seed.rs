//! Canonical starting state: one Hinge conversation with Sarah.

use chrono::{DateTime, Duration, Utc};

use crate::conversations::core::ids::{ConversationId, MessageId, PersonId};
use crate::conversations::core::model::{Conversation, Message, MessageSender, Person};
use crate::conversations::core::tone::ToneProfile;
use crate::conversations::ports::id_gen::IdGenerator;

/// Tone the seed conversation starts with.
pub const SEED_TONE: ToneProfile = ToneProfile::new(7.0, 3.0, 6.0, 7.0, 7.0);

/// Build the seed conversation relative to `now`.
#[must_use]
pub fn seed_conversation(now: DateTime<Utc>, ids: &dyn IdGenerator) -> Conversation {
    let person = Person {
        id: PersonId::from(ids.next_uuid()),
        name: "Sarah".to_string(),
        platform: "Hinge".to_string(),
        avatar: "heart.circle.fill".to_string(),
    };

    let messages = vec![
        Message {
            id: MessageId::from(ids.next_uuid()),
            sender: MessageSender::Other,
            text: "I love hiking! What's your favorite trail?".to_string(),
            timestamp: now - Duration::hours(1),
        },
        Message {
            id: MessageId::from(ids.next_uuid()),
            sender: MessageSender::User,
            text: "Runyon Canyon is my usual go-to. Where do you hike?".to_string(),
            timestamp: now - Duration::minutes(30),
        },
    ];

    Conversation {
        id: ConversationId::from(ids.next_uuid()),
        person,
        messages,
        tone_profile: SEED_TONE,
        needs_response: true,
        last_activity: now - Duration::minutes(10),
        platform_badge: "Hinge".to_string(),
        unread_count: 1,
        health_score: 4,
    }
}

//! Change notifications for the presentation layer.

use tokio::sync::broadcast;
use tracing::trace;

use crate::conversations::core::ids::ConversationId;

/// Something observable changed in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// The selected conversation changed.
    SelectionChanged(Option<ConversationId>),
    /// A conversation's messages, tone or fields changed.
    ConversationUpdated(ConversationId),
    /// A conversation's context note was set.
    ContextChanged(ConversationId),
    /// The displayed suggestion list was replaced.
    SuggestionsReplaced {
        /// Size of the new list.
        count: usize,
    },
}

/// Fan-out of [`StoreEvent`]s to any number of subscribers.
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Create a bus buffering up to `capacity` events per subscriber.
    ///
    /// `capacity` must be non-zero; [`StoreConfig::validate`] guarantees it.
    ///
    /// [`StoreConfig::validate`]: crate::conversations::core::config::StoreConfig::validate
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a new subscriber. It only sees events published afterwards.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    /// Publish `event`. Having no subscribers is fine.
    pub fn publish(&self, event: StoreEvent) {
        match self.tx.send(event) {
            Ok(receivers) => trace!("Published {:?} to {} subscriber(s)", event, receivers),
            Err(_) => trace!("Published {:?} with no subscribers", event),
        }
    }
}

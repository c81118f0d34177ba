//! Two-way handle on a single conversation.

use crate::conversations::core::ids::ConversationId;
use crate::conversations::core::model::Conversation;
use crate::conversations::engine::store::ConversationStore;

/// Read/write accessor for one conversation in a [`ConversationStore`].
///
/// Reads see the store's canonical copy. Changes are committed with
/// [`set`](Self::set) or [`update`](Self::update); the conversation id is
/// never changed by a commit.
pub struct ConversationBinding<'a> {
    store: &'a mut ConversationStore,
    index: usize,
}

impl<'a> ConversationBinding<'a> {
    pub(super) const fn new(store: &'a mut ConversationStore, index: usize) -> Self {
        Self { store, index }
    }

    /// Id of the bound conversation.
    #[must_use]
    pub fn id(&self) -> ConversationId {
        self.get().id
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> &Conversation {
        self.store.conversation_at(self.index)
    }

    /// Replace the bound conversation with `value`, keeping its id.
    pub fn set(&mut self, value: Conversation) {
        self.store.replace_at(self.index, value);
    }

    /// Edit a copy of the conversation with `edit`, then commit it.
    pub fn update(&mut self, edit: impl FnOnce(&mut Conversation)) {
        let mut draft = self.get().clone();
        edit(&mut draft);
        self.set(draft);
    }
}

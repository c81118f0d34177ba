//! In-memory conversation store.
//!
//! Single writer: every mutation takes `&mut self` and runs to completion.
//! Each applied change publishes one [`StoreEvent`]; the `apply_tone` and
//! `paste_context` workflows publish two. Operations that cannot apply
//! (unknown conversation, blank text) leave the state untouched, publish
//! nothing and return quietly.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use crate::conversations::core::config::StoreConfig;
use crate::conversations::core::errors::ToneHoneResult;
use crate::conversations::core::ids::{ConversationId, MessageId};
use crate::conversations::core::model::{Conversation, Message, MessageSender};
use crate::conversations::core::suggestion::Suggestion;
use crate::conversations::core::tone::{TonePreset, ToneProfile, presets};
use crate::conversations::engine::binding::ConversationBinding;
use crate::conversations::engine::events::{EventBus, StoreEvent};
use crate::conversations::engine::seed::seed_conversation;
use crate::conversations::engine::snapshot::StoreSnapshot;
use crate::conversations::ports::clipboard::{ClipboardSink, MemoryClipboard};
use crate::conversations::ports::clock::{Clock, SystemClock};
use crate::conversations::ports::id_gen::{IdGenerator, UuidGenerator};
use crate::conversations::suggestions::templates::build_suggestions;

/// Collaborators the store calls out to.
pub struct StoreBackends {
    /// Time source.
    pub clock: Arc<dyn Clock>,
    /// Id source for messages and suggestions.
    pub ids: Arc<dyn IdGenerator>,
    /// Destination for copied suggestions.
    pub clipboard: Arc<dyn ClipboardSink>,
}

impl StoreBackends {
    /// Wall clock, random ids and an in-process clipboard.
    #[must_use]
    pub fn system() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidGenerator),
            clipboard: Arc::new(MemoryClipboard::new()),
        }
    }
}

impl Default for StoreBackends {
    fn default() -> Self {
        Self::system()
    }
}

/// Conversations, context notes and the displayed suggestions.
pub struct ConversationStore {
    config: StoreConfig,
    conversations: Vec<Conversation>,
    suggestions: Vec<Suggestion>,
    selected: Option<ConversationId>,
    context_notes: HashMap<ConversationId, String>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    clipboard: Arc<dyn ClipboardSink>,
    events: EventBus,
}

impl ConversationStore {
    /// Create a store, seeded with the canonical fixture unless
    /// `config.seed.enabled` is off.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: StoreConfig, backends: StoreBackends) -> ToneHoneResult<Self> {
        let conversations = if config.seed.enabled {
            vec![seed_conversation(backends.clock.now(), backends.ids.as_ref())]
        } else {
            Vec::new()
        };
        Self::with_conversations(config, backends, conversations)
    }

    /// Create a store with system backends.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: StoreConfig) -> ToneHoneResult<Self> {
        Self::new(config, StoreBackends::system())
    }

    /// Create a store holding `conversations`.
    ///
    /// Later duplicates of an id are dropped. The first conversation is
    /// selected, every conversation gets an empty context note, and the
    /// suggestions are built for the selection.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_conversations(
        config: StoreConfig,
        backends: StoreBackends,
        conversations: Vec<Conversation>,
    ) -> ToneHoneResult<Self> {
        config.validate()?;

        let mut unique: Vec<Conversation> = Vec::with_capacity(conversations.len());
        for conversation in conversations {
            if unique.iter().any(|c| c.id == conversation.id) {
                debug!("Dropping duplicate conversation {}", conversation.id);
                continue;
            }
            unique.push(conversation);
        }

        let context_notes = unique.iter().map(|c| (c.id, String::new())).collect();
        let selected = unique.first().map(|c| c.id);
        let events = EventBus::new(config.events.capacity);

        let mut store = Self {
            config,
            conversations: unique,
            suggestions: Vec::new(),
            selected,
            context_notes,
            clock: backends.clock,
            ids: backends.ids,
            clipboard: backends.clipboard,
            events,
        };
        store.suggestions = store.suggestions_for(selected);

        debug!(
            "Conversation store ready with {} conversation(s)",
            store.conversations.len()
        );
        Ok(store)
    }

    // ----- reads -------------------------------------------------------------

    /// Configuration the store was built with.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// All conversations, in insertion order.
    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Conversation with `id`, if present.
    #[must_use]
    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Currently selected id. May name a conversation that does not exist.
    #[must_use]
    pub const fn selected_conversation_id(&self) -> Option<ConversationId> {
        self.selected
    }

    /// Currently selected conversation, if the selection resolves.
    #[must_use]
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.selected.and_then(|id| self.conversation(id))
    }

    /// Displayed suggestions.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Number of conversations waiting on a reply.
    #[must_use]
    pub fn needs_response_count(&self) -> usize {
        self.conversations.iter().filter(|c| c.needs_response).count()
    }

    /// Built-in tone presets.
    #[must_use]
    pub fn presets(&self) -> &'static [TonePreset] {
        presets()
    }

    /// Context note for `conversation_id`; empty if never set.
    #[must_use]
    pub fn context(&self, conversation_id: ConversationId) -> &str {
        self.context_notes
            .get(&conversation_id)
            .map_or("", String::as_str)
    }

    /// Subscribe to change notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Serializable copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            conversations: self.conversations.clone(),
            suggestions: self.suggestions.clone(),
            selected_conversation_id: self.selected,
            context_notes: self
                .context_notes
                .iter()
                .map(|(id, note)| (*id, note.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    // ----- mutations ---------------------------------------------------------

    /// Select `id`. Not validated against the conversation list.
    pub fn select_conversation(&mut self, id: ConversationId) {
        self.selected = Some(id);
        debug!("Selected conversation {}", id);
        self.events.publish(StoreEvent::SelectionChanged(Some(id)));
    }

    /// Read/write handle on the conversation with `id`, or `None`.
    pub fn binding(&mut self, id: ConversationId) -> Option<ConversationBinding<'_>> {
        let index = self.index_of(id)?;
        Some(ConversationBinding::new(self, index))
    }

    /// Append `text` (trimmed) as an outgoing message.
    ///
    /// Targets `conversation_id`, or the selection when `None`. No-op if the
    /// trimmed text is empty or the conversation cannot be found.
    pub fn send_message(&mut self, text: &str, conversation_id: Option<ConversationId>) {
        self.append_outgoing(text, conversation_id, "message");
    }

    /// Accept a suggestion's (possibly edited) text as the outgoing message.
    ///
    /// Same contract as [`send_message`](Self::send_message).
    pub fn use_suggestion(&mut self, text: &str, conversation_id: Option<ConversationId>) {
        self.append_outgoing(text, conversation_id, "suggestion");
    }

    /// Put the suggestion's text on the clipboard.
    pub fn copy_suggestion(&self, suggestion: &Suggestion) {
        self.copy_text(&suggestion.text);
    }

    /// Put arbitrary text (e.g. an edited suggestion) on the clipboard.
    pub fn copy_text(&self, text: &str) {
        self.clipboard.set_text(text);
        debug!("Copied {} char(s) to clipboard", text.chars().count());
    }

    /// Store `text` verbatim as the context note for `conversation_id`.
    pub fn set_context(&mut self, text: impl Into<String>, conversation_id: ConversationId) {
        self.context_notes.insert(conversation_id, text.into());
        debug!("Context set for conversation {}", conversation_id);
        self.events.publish(StoreEvent::ContextChanged(conversation_id));
    }

    /// Replace the tone of `conversation_id`. No-op if unknown.
    pub fn update_tone(&mut self, tone: ToneProfile, conversation_id: ConversationId) {
        let Some(index) = self.index_of(conversation_id) else {
            debug!("Tone update ignored: unknown conversation {}", conversation_id);
            return;
        };
        self.conversations[index].tone_profile = tone;
        debug!("Tone updated for conversation {}: {}", conversation_id, tone.describe());
        self.events.publish(StoreEvent::ConversationUpdated(conversation_id));
    }

    /// Rebuild the displayed suggestions.
    ///
    /// Uses `conversation_id`, or the selection when `None`. If neither
    /// resolves, falls back to suggestions without context or tone hints.
    pub fn regenerate_suggestions(&mut self, conversation_id: Option<ConversationId>) {
        let target = conversation_id.or(self.selected);
        self.suggestions = self.suggestions_for(target);
        debug!(
            "Regenerated {} suggestion(s) for {:?}",
            self.suggestions.len(),
            target
        );
        self.events.publish(StoreEvent::SuggestionsReplaced {
            count: self.suggestions.len(),
        });
    }

    /// Update the tone and rebuild suggestions for that conversation.
    ///
    /// No-op if the conversation is unknown.
    pub fn apply_tone(&mut self, tone: ToneProfile, conversation_id: ConversationId) {
        if self.index_of(conversation_id).is_none() {
            debug!("Apply tone ignored: unknown conversation {}", conversation_id);
            return;
        }
        self.update_tone(tone, conversation_id);
        self.regenerate_suggestions(Some(conversation_id));
    }

    /// Store pasted text as context and rebuild suggestions.
    ///
    /// Blank (whitespace-only) text and unknown conversations are rejected;
    /// otherwise the text is stored verbatim.
    pub fn paste_context(&mut self, text: &str, conversation_id: ConversationId) {
        if self.index_of(conversation_id).is_none() {
            debug!("Paste ignored: unknown conversation {}", conversation_id);
            return;
        }
        if text.trim().is_empty() {
            debug!("Paste ignored: blank context for {}", conversation_id);
            return;
        }
        self.set_context(text, conversation_id);
        self.regenerate_suggestions(Some(conversation_id));
    }

    // ----- internals ---------------------------------------------------------

    fn index_of(&self, id: ConversationId) -> Option<usize> {
        self.conversations.iter().position(|c| c.id == id)
    }

    fn suggestions_for(&self, target: Option<ConversationId>) -> Vec<Suggestion> {
        match target.and_then(|id| self.conversation(id)) {
            Some(conversation) => build_suggestions(
                self.context(conversation.id),
                Some(&conversation.tone_profile),
                self.ids.as_ref(),
            ),
            None => build_suggestions("", None, self.ids.as_ref()),
        }
    }

    fn append_outgoing(
        &mut self,
        text: &str,
        conversation_id: Option<ConversationId>,
        what: &str,
    ) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank {}", what);
            return;
        }

        let Some(id) = conversation_id.or(self.selected) else {
            debug!("Ignoring {}: no conversation selected", what);
            return;
        };
        let Some(index) = self.index_of(id) else {
            debug!("Ignoring {}: unknown conversation {}", what, id);
            return;
        };

        let message = Message {
            id: MessageId::from(self.ids.next_uuid()),
            sender: MessageSender::User,
            text: trimmed.to_string(),
            timestamp: self.clock.now(),
        };
        self.conversations[index].push_outgoing(message);
        debug!("Appended {} to conversation {}", what, id);
        self.events.publish(StoreEvent::ConversationUpdated(id));
    }

    pub(super) fn conversation_at(&self, index: usize) -> &Conversation {
        &self.conversations[index]
    }

    pub(super) fn replace_at(&mut self, index: usize, mut value: Conversation) {
        let id = self.conversations[index].id;
        value.id = id;
        self.conversations[index] = value;
        debug!("Conversation {} replaced through binding", id);
        self.events.publish(StoreEvent::ConversationUpdated(id));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;
    use crate::conversations::core::config::SeedConfig;
    use crate::conversations::engine::seed::SEED_TONE;
    use crate::conversations::ports::clock::ManualClock;
    use crate::conversations::ports::id_gen::SequentialIds;

    struct Fixture {
        store: ConversationStore,
        clock: Arc<ManualClock>,
        clipboard: Arc<MemoryClipboard>,
        start: DateTime<Utc>,
    }

    fn fixture_with(config: StoreConfig) -> Fixture {
        let start = Utc.with_ymd_and_hms(2025, 11, 27, 18, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let clipboard = Arc::new(MemoryClipboard::new());
        let backends = StoreBackends {
            clock: clock.clone(),
            ids: Arc::new(SequentialIds::default()),
            clipboard: clipboard.clone(),
        };
        let store = ConversationStore::new(config, backends).unwrap();
        Fixture {
            store,
            clock,
            clipboard,
            start,
        }
    }

    fn seeded() -> Fixture {
        fixture_with(StoreConfig::default())
    }

    fn empty() -> Fixture {
        fixture_with(StoreConfig {
            seed: SeedConfig { enabled: false },
            ..StoreConfig::default()
        })
    }

    fn seed_id(store: &ConversationStore) -> ConversationId {
        store.conversations()[0].id
    }

    fn drain(rx: &mut broadcast::Receiver<StoreEvent>) -> Vec<StoreEvent> {
        let mut events = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return events,
                Err(TryRecvError::Lagged(_)) => {}
            }
        }
    }

    #[test]
    fn test_seed_state() {
        let fx = seeded();
        let store = &fx.store;
        let id = seed_id(store);

        assert_eq!(store.conversations().len(), 1);
        assert_eq!(store.selected_conversation_id(), Some(id));
        assert_eq!(store.context(id), "");
        assert_eq!(store.needs_response_count(), 1);
        assert_eq!(store.presets().len(), 5);

        let suggestions = store.suggestions();
        assert_eq!(suggestions.len(), 4);
        for suggestion in suggestions {
            assert!(suggestion.rationale.ends_with(" Tone: P7/F3/Fw6/E7/Fl7."));
            assert!(!suggestion.rationale.contains("Based on:"));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = StoreConfig::default();
        config.events.capacity = 0;
        assert!(ConversationStore::new(config, StoreBackends::system()).is_err());
    }

    #[test]
    fn test_duplicate_conversations_dropped() {
        let now = Utc::now();
        let ids = SequentialIds::default();
        let first = seed_conversation(now, &ids);
        let mut dup = first.clone();
        dup.person.name = "Impostor".to_string();

        let store = ConversationStore::with_conversations(
            StoreConfig::default(),
            StoreBackends::system(),
            vec![first, dup],
        )
        .unwrap();

        assert_eq!(store.conversations().len(), 1);
        assert_eq!(store.conversations()[0].person.name, "Sarah");
        let unique: HashSet<_> = store.conversations().iter().map(|c| c.id).collect();
        assert_eq!(unique.len(), store.conversations().len());
    }

    #[test]
    fn test_send_message_appends_and_clears_needs_response() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);
        fx.clock.advance(Duration::minutes(3));
        let sent_at = fx.start + Duration::minutes(3);

        fx.store.send_message("hello", Some(id));

        let convo = fx.store.conversation(id).unwrap();
        assert_eq!(convo.messages.len(), 3);
        let last = convo.last_message().unwrap();
        assert_eq!(last.text, "hello");
        assert_eq!(last.sender, MessageSender::User);
        assert_eq!(last.timestamp, sent_at);
        assert_eq!(convo.last_activity, sent_at);
        assert!(!convo.needs_response);
    }

    #[test]
    fn test_send_message_trims_and_defaults_to_selection() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);

        fx.store.send_message("  see you there \n", None);

        let convo = fx.store.conversation(id).unwrap();
        assert_eq!(convo.last_message().unwrap().text, "see you there");
    }

    #[test]
    fn test_blank_send_is_rejected() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);
        let before = fx.store.conversation(id).unwrap().clone();
        let mut rx = fx.store.subscribe();

        fx.store.send_message("   ", Some(id));
        fx.store.send_message("", Some(id));
        fx.store.use_suggestion("\t\n", Some(id));

        let after = fx.store.conversation(id).unwrap();
        assert_eq!(after.messages.len(), before.messages.len());
        assert_eq!(after.needs_response, before.needs_response);
        assert_eq!(after.last_activity, before.last_activity);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_send_to_unknown_or_unselected_is_noop() {
        let mut fx = empty();
        fx.store.send_message("hello", None);
        fx.store.send_message("hello", Some(ConversationId::new()));
        assert!(fx.store.conversations().is_empty());

        let mut fx = seeded();
        let id = seed_id(&fx.store);
        fx.store.select_conversation(ConversationId::new());
        fx.store.send_message("hello", None);
        assert_eq!(fx.store.conversation(id).unwrap().messages.len(), 2);
    }

    #[test]
    fn test_use_suggestion_matches_send_contract() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);
        let text = fx.store.suggestions()[2].text.clone();

        fx.store.use_suggestion(&format!(" {text} "), Some(id));

        let convo = fx.store.conversation(id).unwrap();
        assert_eq!(convo.messages.len(), 3);
        assert_eq!(convo.last_message().unwrap().text, text);
        assert_eq!(convo.last_activity, fx.start);
        assert!(!convo.needs_response);
        assert_eq!(fx.store.needs_response_count(), 0);
    }

    #[test]
    fn test_sending_leaves_suggestions_alone() {
        let mut fx = seeded();
        let before = fx.store.suggestions().to_vec();
        fx.store.send_message("hello", None);
        assert_eq!(fx.store.suggestions(), before.as_slice());
    }

    #[test]
    fn test_copy_suggestion_only_touches_clipboard() {
        let fx = seeded();
        let snapshot = fx.store.snapshot();
        let suggestion = fx.store.suggestions()[0].clone();

        fx.store.copy_suggestion(&suggestion);
        assert_eq!(fx.clipboard.contents(), Some(suggestion.text));

        fx.store.copy_text("edited reply");
        assert_eq!(fx.clipboard.contents().as_deref(), Some("edited reply"));
        assert_eq!(fx.store.snapshot(), snapshot);
    }

    #[test]
    fn test_context_round_trip() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);

        fx.store.set_context("abc", id);
        assert_eq!(fx.store.context(id), "abc");

        fx.store.set_context("  padded  ", id);
        assert_eq!(fx.store.context(id), "  padded  ");

        assert_eq!(fx.store.context(ConversationId::new()), "");
    }

    #[test]
    fn test_update_tone() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);
        let tone = ToneProfile::new(2.0, 9.0, 3.0, 4.0, 1.0);

        fx.store.update_tone(tone, id);
        assert_eq!(fx.store.conversation(id).unwrap().tone_profile, tone);

        let before = fx.store.snapshot();
        fx.store.update_tone(SEED_TONE, ConversationId::new());
        assert_eq!(fx.store.snapshot(), before);
    }

    #[test]
    fn test_regenerate_fallback_without_conversations() {
        let mut fx = empty();
        assert_eq!(fx.store.selected_conversation_id(), None);

        fx.store.regenerate_suggestions(None);

        let suggestions = fx.store.suggestions();
        assert_eq!(suggestions.len(), 4);
        assert_eq!(
            suggestions[0].rationale,
            "Builds on hiking, matches playful tone, invites engagement."
        );
        for suggestion in suggestions {
            assert!(!suggestion.rationale.contains("Based on:"));
            assert!(!suggestion.rationale.contains("Tone:"));
        }
    }

    #[test]
    fn test_regenerate_unknown_id_falls_back() {
        let mut fx = seeded();
        fx.store.regenerate_suggestions(Some(ConversationId::new()));
        for suggestion in fx.store.suggestions() {
            assert!(!suggestion.rationale.contains("Tone:"));
        }
    }

    #[test]
    fn test_regenerate_replaces_ids() {
        let mut fx = seeded();
        let old: HashSet<_> = fx.store.suggestions().iter().map(|s| s.id).collect();

        fx.store.regenerate_suggestions(None);

        let new: HashSet<_> = fx.store.suggestions().iter().map(|s| s.id).collect();
        assert_eq!(new.len(), 4);
        assert!(old.is_disjoint(&new));
    }

    #[test]
    fn test_end_to_end_context_scenario() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);
        let before = fx.store.conversation(id).unwrap().clone();

        fx.store.set_context("Just got back from Runyon!", id);
        fx.store.regenerate_suggestions(Some(id));

        let suggestions = fx.store.suggestions();
        assert_eq!(suggestions.len(), 4);
        for suggestion in suggestions {
            assert!(
                suggestion
                    .rationale
                    .contains("Based on: \"Just got back from Runyon!\"")
            );
            assert!(suggestion.rationale.contains("Tone: P7/F3/Fw6/E7/Fl7."));
        }

        let after = fx.store.conversation(id).unwrap();
        assert_eq!(after, &before);
        assert_eq!(fx.store.selected_conversation_id(), Some(id));
    }

    #[test]
    fn test_apply_tone_regenerates() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);
        let preset = fx.store.presets()[4].profile;

        fx.store.apply_tone(preset, id);

        assert_eq!(fx.store.conversation(id).unwrap().tone_profile, preset);
        for suggestion in fx.store.suggestions() {
            assert!(suggestion.rationale.ends_with("Tone: P3/F7/Fw5/E4/Fl1."));
        }
    }

    #[test]
    fn test_apply_tone_unknown_is_noop() {
        let mut fx = seeded();
        let before = fx.store.snapshot();
        let mut rx = fx.store.subscribe();

        fx.store.apply_tone(SEED_TONE, ConversationId::new());

        assert_eq!(fx.store.snapshot(), before);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_paste_context() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);

        fx.store.paste_context("   ", id);
        assert_eq!(fx.store.context(id), "");

        fx.store.paste_context("I love dogs", id);
        assert_eq!(fx.store.context(id), "I love dogs");
        for suggestion in fx.store.suggestions() {
            assert!(
                suggestion
                    .rationale
                    .ends_with(" Based on: \"I love dogs\" Tone: P7/F3/Fw6/E7/Fl7.")
            );
        }
    }

    #[test]
    fn test_paste_context_unknown_is_noop() {
        let mut fx = seeded();
        let ghost = ConversationId::new();
        let before = fx.store.snapshot();
        let mut rx = fx.store.subscribe();

        fx.store.paste_context("hello", ghost);

        assert_eq!(fx.store.snapshot(), before);
        assert_eq!(fx.store.context(ghost), "");
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_workflows_publish_two_events() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);
        let mut rx = fx.store.subscribe();

        fx.store.apply_tone(SEED_TONE, id);
        assert_eq!(
            drain(&mut rx),
            vec![
                StoreEvent::ConversationUpdated(id),
                StoreEvent::SuggestionsReplaced { count: 4 },
            ]
        );

        fx.store.paste_context("Just got back from Runyon!", id);
        assert_eq!(
            drain(&mut rx),
            vec![
                StoreEvent::ContextChanged(id),
                StoreEvent::SuggestionsReplaced { count: 4 },
            ]
        );

        fx.store.paste_context("  ", id);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_select_is_not_validated() {
        let mut fx = seeded();
        let ghost = ConversationId::new();

        fx.store.select_conversation(ghost);

        assert_eq!(fx.store.selected_conversation_id(), Some(ghost));
        assert!(fx.store.selected_conversation().is_none());
        assert_eq!(fx.store.suggestions().len(), 4);
    }

    #[test]
    fn test_binding_reads_and_writes_through() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);

        {
            let mut binding = fx.store.binding(id).unwrap();
            assert_eq!(binding.id(), id);
            assert_eq!(binding.get().person.name, "Sarah");

            binding.update(|c| {
                c.unread_count = 0;
                c.id = ConversationId::new();
            });
            assert_eq!(binding.get().unread_count, 0);
        }

        let convo = fx.store.conversation(id).unwrap();
        assert_eq!(convo.unread_count, 0);
        assert_eq!(fx.store.conversations().len(), 1);
    }

    #[test]
    fn test_binding_unknown_is_none() {
        let mut fx = seeded();
        assert!(fx.store.binding(ConversationId::new()).is_none());
    }

    #[test]
    fn test_events_published_per_mutation() {
        let mut fx = seeded();
        let id = seed_id(&fx.store);
        let mut rx = fx.store.subscribe();

        fx.store.select_conversation(id);
        fx.store.send_message("hi", None);
        fx.store.set_context("ctx", id);
        fx.store.update_tone(SEED_TONE, id);
        fx.store.regenerate_suggestions(None);

        assert_eq!(
            drain(&mut rx),
            vec![
                StoreEvent::SelectionChanged(Some(id)),
                StoreEvent::ConversationUpdated(id),
                StoreEvent::ContextChanged(id),
                StoreEvent::ConversationUpdated(id),
                StoreEvent::SuggestionsReplaced { count: 4 },
            ]
        );
    }

    #[test]
    fn test_snapshot_json() {
        let fx = seeded();
        let id = seed_id(&fx.store);
        let json = fx.store.snapshot().to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["selected_conversation_id"], id.to_string());
        assert_eq!(value["conversations"][0]["person"]["name"], "Sarah");
        assert_eq!(value["suggestions"][0]["variant"], "question");
        assert_eq!(value["context_notes"][id.to_string()], "");
    }
}

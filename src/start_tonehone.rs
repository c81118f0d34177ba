//! Startup helpers for the `tonehone` binary.

use std::process::ExitCode;

use crate::conversations::{
    ConversationStore, StoreConfig, ToneHoneResult, init_tracing, preview_reply,
};

/// Build a store from the environment and log what the home screen would show.
///
/// # Returns
/// `ExitCode::SUCCESS` when the store starts, `1` on invalid configuration.
#[must_use]
pub fn run() -> ExitCode {
    init_tracing();
    tracing::info!("Starting ToneHone v{}", env!("CARGO_PKG_VERSION"));

    match initialize() {
        Ok(store) => {
            log_overview(&store);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to create store: {e}");
            ExitCode::from(1)
        }
    }
}

/// Create the store without logging an overview.
///
/// # Errors
/// Returns an error if the environment yields an invalid configuration.
pub fn initialize() -> ToneHoneResult<ConversationStore> {
    let config = StoreConfig::from_env();
    tracing::debug!(
        "Config: event capacity {}, seed {}",
        config.events.capacity,
        config.seed.enabled
    );
    ConversationStore::from_config(config)
}

fn log_overview(store: &ConversationStore) {
    tracing::info!(
        "{} conversation(s), {} awaiting a reply",
        store.conversations().len(),
        store.needs_response_count()
    );

    if let Some(convo) = store.selected_conversation() {
        tracing::info!(
            "Selected: {} on {} ({} messages, tone {})",
            convo.person.name,
            convo.platform_badge,
            convo.messages.len(),
            convo.tone_profile.describe()
        );
        tracing::info!("Tone preview: {}", preview_reply(&convo.tone_profile));
    }

    for suggestion in store.suggestions() {
        tracing::info!(
            "[{} {}] {}",
            suggestion.variant,
            suggestion.match_score,
            suggestion.text
        );
    }
}

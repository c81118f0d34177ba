//! Clipboard sink used by "copy suggestion".

use std::sync::Mutex;

/// Accepts text destined for the system clipboard. Fire-and-forget.
pub trait ClipboardSink: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn set_text(&self, text: &str);
}

/// In-process clipboard that remembers the last copied text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text, if anything was copied.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        match self.contents.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&self, text: &str) {
        match self.contents.lock() {
            Ok(mut guard) => *guard = Some(text.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(text.to_string()),
        }
    }
}

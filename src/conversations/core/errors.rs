//! Error types for the conversation subsystem.
//!
//! Store operations degrade to silent no-ops; only configuration and
//! snapshot export can fail.

use thiserror::Error;

/// Conversation subsystem error type.
#[derive(Debug, Error)]
pub enum ToneHoneError {
    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result alias for fallible operations.
pub type ToneHoneResult<T> = Result<T, ToneHoneError>;

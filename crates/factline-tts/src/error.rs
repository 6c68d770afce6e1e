//! Error types for speech synthesis.

use thiserror::Error;

/// Result type for TTS operations.
pub type TtsResult<T> = Result<T, TtsError>;

/// Errors that can occur during speech synthesis.
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("TTS API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TtsError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        let mut message = message.into();
        // Error bodies can be large HTML pages; keep logs readable.
        if message.len() > 200 {
            message.truncate(200);
        }
        Self::Api { status, message }
    }
}

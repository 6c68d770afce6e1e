//! Error types for platform uploads.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for platform operations.
///
/// Named to avoid colliding with the `UploadResult` URL bundle in the
/// models crate.
pub type PlatformResult<T> = Result<T, UploadError>;

/// Errors that can occur while uploading to a platform.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Platform API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Video file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.len() > 300 {
            message.truncate(300);
        }
        Self::Api { status, message }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}

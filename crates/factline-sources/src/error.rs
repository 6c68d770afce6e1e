//! Error types for data collection.

use thiserror::Error;

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while fetching from a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP {status} from {url}")]
    Api { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl SourceError {
    pub fn api(status: u16, url: impl Into<String>) -> Self {
        Self::Api {
            status,
            url: url.into(),
        }
    }

    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayload(msg.into())
    }
}

//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document already exists: {0}")]
    AlreadyExists(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited, retry after {0}ms")]
    RateLimited(u64),

    #[error("Server error {0}: {1}")]
    ServerError(u16, String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn auth_error(msg: impl Into<String>) -> Self {
        Self::AuthError(msg.into())
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Map an HTTP status to the matching error variant.
    pub fn from_http_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => Self::NotFound(message),
            403 => Self::PermissionDenied(message),
            409 => Self::AlreadyExists(message),
            429 => Self::RateLimited(1000),
            500..=599 => Self::ServerError(status, message),
            _ => Self::RequestFailed(message),
        }
    }

    /// HTTP status this error maps back to, for metrics.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::PermissionDenied(_) => Some(403),
            Self::AlreadyExists(_) => Some(409),
            Self::RateLimited(_) => Some(429),
            Self::ServerError(status, _) => Some(*status),
            Self::AuthError(_) => Some(401),
            _ => None,
        }
    }

    /// Check if error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StoreError::Network(_) | StoreError::RateLimited(_) | StoreError::ServerError(..)
        )
    }

    /// Suggested delay before retrying, if the server supplied one.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            StoreError::RateLimited(ms) => Some(*ms),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_status_409() {
        let err = StoreError::from_http_status(409, "conflict");
        assert!(matches!(err, StoreError::AlreadyExists(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_http_status_retryables() {
        assert!(StoreError::from_http_status(429, "slow down").is_retryable());
        assert!(StoreError::from_http_status(503, "unavailable").is_retryable());
        assert!(!StoreError::from_http_status(400, "bad").is_retryable());
    }

    #[test]
    fn test_http_status_roundtrip() {
        assert_eq!(StoreError::RateLimited(1000).http_status(), Some(429));
        assert_eq!(
            StoreError::ServerError(502, "bad gateway".into()).http_status(),
            Some(502)
        );
    }
}

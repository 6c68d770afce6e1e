//! Token caching for store authentication.
//!
//! Thread-safe, async-aware token cache with a refresh margin, a
//! single-flight refresh path, and graceful fallback to an existing
//! valid token when refresh fails. A static-token mode supports tests
//! and the Firestore emulator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use gcp_auth::TokenProvider;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Refresh margin: refresh token 60 seconds before expiry.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Conservative token TTL when expiry is unknown (50 minutes).
const TOKEN_DEFAULT_TTL: Duration = Duration::from_secs(50 * 60);

/// OAuth scope for Firestore/Datastore access.
pub const FIRESTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

/// Cached token with expiration tracking.
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() + TOKEN_REFRESH_MARGIN < self.expires_at
    }

    fn is_usable(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

enum AuthMode {
    ServiceAccount(Arc<dyn TokenProvider>),
    /// Fixed token, used by tests and the emulator.
    Static(String),
}

/// Thread-safe token cache with single-flight refresh.
pub struct TokenCache {
    auth: AuthMode,
    cache: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    /// Create a cache backed by a GCP token provider.
    pub fn new(auth: Arc<dyn TokenProvider>) -> Self {
        Self {
            auth: AuthMode::ServiceAccount(auth),
            cache: RwLock::new(None),
        }
    }

    /// Create a cache that always returns a fixed token.
    pub fn with_static_token(token: impl Into<String>) -> Self {
        Self {
            auth: AuthMode::Static(token.into()),
            cache: RwLock::new(None),
        }
    }

    /// Invalidate the cached token.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.write().await;
        *cache = None;
    }

    /// Get a valid access token, refreshing if necessary.
    pub async fn get_token(&self) -> StoreResult<String> {
        if let AuthMode::Static(token) = &self.auth {
            return Ok(token.clone());
        }

        // Fast path: check read lock first
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        // Slow path: acquire write lock and refresh
        let mut cache = self.cache.write().await;

        // Double-check: another task may have refreshed while we waited
        if let Some(cached) = cache.as_ref() {
            if cached.is_valid() {
                return Ok(cached.access_token.clone());
            }
        }

        self.refresh_token(&mut cache).await
    }

    async fn refresh_token(&self, cache: &mut Option<CachedToken>) -> StoreResult<String> {
        let provider = match &self.auth {
            AuthMode::ServiceAccount(provider) => provider,
            AuthMode::Static(token) => return Ok(token.clone()),
        };

        match provider.token(&[FIRESTORE_SCOPE]).await {
            Ok(token) => {
                let access_token = token.as_str().to_string();

                // Prefer the real expiry, fall back to a conservative default.
                let expires_at = {
                    let now = Utc::now();
                    let exp = token.expires_at();

                    if exp > now {
                        match (exp - now).to_std() {
                            Ok(ttl) => Instant::now() + ttl,
                            Err(_) => Instant::now() + TOKEN_DEFAULT_TTL,
                        }
                    } else {
                        // An already-expired token forces refresh on the
                        // next request.
                        Instant::now()
                    }
                };

                *cache = Some(CachedToken {
                    access_token: access_token.clone(),
                    expires_at,
                });

                debug!("Refreshed store auth token");
                Ok(access_token)
            }
            Err(e) => {
                if let Some(cached) = cache.as_ref() {
                    if cached.is_usable() {
                        warn!("Token refresh failed, using existing token: {}", e);
                        return Ok(cached.access_token.clone());
                    }
                }

                Err(StoreError::auth_error(format!(
                    "Failed to obtain auth token: {}",
                    e
                )))
            }
        }
    }
}

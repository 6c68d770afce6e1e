//! Firestore REST API client.
//!
//! Production-grade client with:
//! - Token caching with refresh margin
//! - HTTP client tuning (pooling, timeouts)
//! - Exponential backoff with jitter
//! - Observability (tracing spans, metrics)

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gcp_auth::{CustomServiceAccount, TokenProvider};
use reqwest::{Client, StatusCode};
use tracing::{info_span, Instrument};

use crate::error::{StoreError, StoreResult};
use crate::metrics::record_request;
use crate::retry::{with_retry, RetryConfig};
use crate::token_cache::TokenCache;
use crate::types::{Document, Value};

/// Store client configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// GCP project ID
    pub project_id: String,
    /// Database ID (usually "(default)")
    pub database_id: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Retry configuration
    pub retry: RetryConfig,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        let project_id = std::env::var("GCP_PROJECT_ID")
            .or_else(|_| std::env::var("FIREBASE_PROJECT_ID"))
            .map_err(|_| {
                StoreError::auth_error(
                    "GCP_PROJECT_ID or FIREBASE_PROJECT_ID must be set to access the store",
                )
            })?;

        if project_id.is_empty() {
            return Err(StoreError::auth_error(
                "GCP_PROJECT_ID or FIREBASE_PROJECT_ID cannot be empty",
            ));
        }

        Ok(Self {
            project_id,
            database_id: std::env::var("FIRESTORE_DATABASE_ID")
                .unwrap_or_else(|_| "(default)".to_string()),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            retry: RetryConfig::from_env(),
        })
    }
}

/// Firestore REST API client.
pub struct StoreClient {
    http: Client,
    retry: RetryConfig,
    base_url: String,
    token_cache: Arc<TokenCache>,
}

impl Clone for StoreClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            retry: self.retry.clone(),
            base_url: self.base_url.clone(),
            token_cache: Arc::clone(&self.token_cache),
        }
    }
}

impl StoreClient {
    /// Create a new store client against the production endpoint.
    pub async fn new(config: StoreConfig) -> StoreResult<Self> {
        let auth = Self::create_auth_provider()?;

        let http = Self::build_http(&config)?;

        let base_url = format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/{}/documents",
            config.project_id, config.database_id
        );

        Ok(Self {
            http,
            retry: config.retry,
            base_url,
            token_cache: Arc::new(TokenCache::new(auth)),
        })
    }

    /// Create a client against an arbitrary base URL with a fixed token.
    ///
    /// Used by tests and Firestore-emulator setups; `base_url` must be
    /// the full documents root (`.../documents`).
    pub fn with_static_token(
        base_url: impl Into<String>,
        token: impl Into<String>,
        retry: RetryConfig,
    ) -> StoreResult<Self> {
        let config = StoreConfig {
            project_id: "emulator".to_string(),
            database_id: "(default)".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            retry: retry.clone(),
        };
        Ok(Self {
            http: Self::build_http(&config)?,
            retry,
            base_url: base_url.into(),
            token_cache: Arc::new(TokenCache::with_static_token(token)),
        })
    }

    fn build_http(config: &StoreConfig) -> StoreResult<Client> {
        Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("factline-store/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StoreError::Network)
    }

    fn create_auth_provider() -> StoreResult<Arc<dyn TokenProvider>> {
        let service_account = CustomServiceAccount::from_env()
            .map_err(|e| StoreError::auth_error(format!("Failed to load service account: {}", e)))?;

        match service_account {
            Some(sa) => Ok(Arc::new(sa)),
            None => Err(StoreError::auth_error(
                "GOOGLE_APPLICATION_CREDENTIALS not set. \
                 Set it to the path of your service account JSON file.",
            )),
        }
    }

    /// Create from environment variables.
    pub async fn from_env() -> StoreResult<Self> {
        let config = StoreConfig::from_env()?;
        Self::new(config).await
    }

    fn is_access_token_expired(body: &str) -> bool {
        body.contains("ACCESS_TOKEN_EXPIRED") || body.contains("\"UNAUTHENTICATED\"")
    }

    /// Build document path.
    fn document_path(&self, collection: &str, doc_id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, doc_id)
    }

    /// Send a request, re-authenticating once on an expired token.
    async fn send_with_reauth<B>(&self, build: B) -> StoreResult<reqwest::Response>
    where
        B: Fn(&Client, &str) -> reqwest::RequestBuilder,
    {
        let token = self.token_cache.get_token().await?;
        let response = build(&self.http, &token).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            if Self::is_access_token_expired(&body) {
                self.token_cache.invalidate().await;
                let token = self.token_cache.get_token().await?;
                return Ok(build(&self.http, &token).send().await?);
            }
            return Err(StoreError::auth_error(body));
        }
        Ok(response)
    }

    // =========================================================================
    // CRUD Operations
    // =========================================================================

    /// Get a document. `Ok(None)` when it does not exist.
    pub async fn get_document(
        &self,
        collection: &str,
        doc_id: &str,
    ) -> StoreResult<Option<Document>> {
        let url = self.document_path(collection, doc_id);

        with_retry(&self.retry, "get_document", || {
            self.execute_request("get_document", collection, Some(doc_id), async {
                let response = self.send_with_reauth(|http, token| http.get(&url).bearer_auth(token)).await?;
                let status = response.status();

                match status {
                    StatusCode::OK => {
                        let doc: Document = response.json().await?;
                        Ok(Some(doc))
                    }
                    StatusCode::NOT_FOUND => Ok(None),
                    _ => Err(Self::error_from_response(status, &url, response).await),
                }
            })
        })
        .await
    }

    /// Create a document with an explicit ID.
    ///
    /// A duplicate ID surfaces as `StoreError::AlreadyExists`; the
    /// uniqueness constraint lives in the storage layer.
    pub async fn create_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: HashMap<String, Value>,
    ) -> StoreResult<Document> {
        let url = format!("{}/{}?documentId={}", self.base_url, collection, doc_id);
        let body = Document::new(fields);

        with_retry(&self.retry, "create_document", || {
            self.execute_request("create_document", collection, Some(doc_id), async {
                let response = self
                    .send_with_reauth(|http, token| http.post(&url).bearer_auth(token).json(&body))
                    .await?;
                let status = response.status();

                match status {
                    StatusCode::OK | StatusCode::CREATED => {
                        let doc: Document = response.json().await?;
                        Ok(doc)
                    }
                    StatusCode::CONFLICT => Err(StoreError::AlreadyExists(format!(
                        "{}/{}",
                        collection, doc_id
                    ))),
                    _ => Err(Self::error_from_response(status, &url, response).await),
                }
            })
        })
        .await
    }

    /// Update a document (merge), optionally masking the fields touched.
    pub async fn update_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: HashMap<String, Value>,
        update_mask: Option<Vec<String>>,
    ) -> StoreResult<Document> {
        let mut url = self.document_path(collection, doc_id);
        if let Some(mask) = update_mask {
            let params: Vec<String> = mask
                .iter()
                .map(|f| format!("updateMask.fieldPaths={}", f))
                .collect();
            url = format!("{}?{}", url, params.join("&"));
        }

        let body = Document::new(fields);

        with_retry(&self.retry, "update_document", || {
            self.execute_request("update_document", collection, Some(doc_id), async {
                let response = self
                    .send_with_reauth(|http, token| http.patch(&url).bearer_auth(token).json(&body))
                    .await?;
                let status = response.status();

                match status {
                    StatusCode::OK => {
                        let doc: Document = response.json().await?;
                        Ok(doc)
                    }
                    StatusCode::NOT_FOUND => {
                        Err(StoreError::not_found(format!("{}/{}", collection, doc_id)))
                    }
                    _ => Err(Self::error_from_response(status, &url, response).await),
                }
            })
        })
        .await
    }

    async fn execute_request<T, F>(
        &self,
        operation: &str,
        collection: &str,
        doc_id: Option<&str>,
        fut: F,
    ) -> StoreResult<T>
    where
        F: std::future::Future<Output = StoreResult<T>>,
    {
        let span = if let Some(id) = doc_id {
            info_span!("store_request", operation = %operation, collection = %collection, doc_id = %id)
        } else {
            info_span!("store_request", operation = %operation, collection = %collection)
        };

        let start = Instant::now();
        let result = fut.instrument(span).await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(_) => 200,
            Err(e) => e.http_status().unwrap_or(500),
        };
        record_request(operation, status, latency_ms);

        result
    }

    async fn error_from_response(
        status: StatusCode,
        url: &str,
        response: reqwest::Response,
    ) -> StoreError {
        let body = response.text().await.unwrap_or_default();
        StoreError::from_http_status(status.as_u16(), format!("{} failed: {}", url, body))
    }
}

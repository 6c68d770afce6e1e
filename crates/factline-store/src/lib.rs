//! Firestore-backed persistence.
//!
//! Two logical collections:
//! - `videos`: one document per generated video, keyed by the slug of
//!   its title, so title uniqueness is enforced by the storage layer
//!   (duplicate creates surface as `StoreError::AlreadyExists`).
//! - `topics_used`: per-topic usage counters; writable through the
//!   repository but not yet written by the pipeline.
//!
//! The client speaks the Firestore REST API with token caching,
//! exponential backoff with jitter, and request metrics.

pub mod client;
pub mod error;
pub mod metrics;
pub mod repos;
pub mod retry;
pub mod token_cache;
pub mod types;

pub use client::{StoreClient, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use repos::{TopicUsageRepository, VideoRepository};
pub use retry::RetryConfig;

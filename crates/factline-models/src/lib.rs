//! Shared data models for the Factline pipeline.
//!
//! Plain data types passed between pipeline stages:
//! - Categories and the facts collected for them
//! - Generated content (title, script, SEO metadata)
//! - Rendered artifact sets and upload results
//! - Persisted records

pub mod category;
pub mod content;
pub mod fact;
pub mod record;
pub mod upload;
pub mod utils;
pub mod video;

pub use category::{Category, CategoryParseError};
pub use content::{ContentBundle, Script, SeoMetadata};
pub use fact::{FactBundle, FactRecord, Provenance};
pub use record::{TopicUsage, VideoRecord};
pub use upload::UploadResult;
pub use utils::slugify;
pub use video::{RenderOutcome, RunOutcome, VideoFileSet};

//! Persisted records.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::upload::UploadResult;
use crate::utils::slugify;

/// One row per generated video.
///
/// Titles are unique: the storage document ID is `slugify(title)`, so a
/// duplicate title surfaces as a storage-level conflict rather than a
/// silent overwrite. The engagement counters are written once at
/// creation; updating them later is left to external tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoRecord {
    pub title: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_shorts_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub engagement_rate: f64,
}

impl VideoRecord {
    /// Build the record persisted at the end of a run.
    pub fn from_run(title: impl Into<String>, category: Category, uploads: &UploadResult) -> Self {
        Self {
            title: title.into(),
            category,
            created_at: Utc::now(),
            youtube_url: uploads.youtube_url.clone(),
            youtube_shorts_url: uploads.youtube_shorts_url.clone(),
            instagram_url: uploads.instagram_url.clone(),
            views: 0,
            engagement_rate: 0.0,
        }
    }

    /// Storage document ID derived from the title.
    pub fn doc_id(&self) -> String {
        slugify(&self.title)
    }
}

/// One row per topic ever used in a video.
///
/// The collection exists and the repository can write it, but the
/// pipeline does not record usage yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TopicUsage {
    pub topic: String,
    pub last_used: DateTime<Utc>,
    pub usage_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_run_defaults() {
        let uploads = UploadResult {
            youtube_url: Some("https://youtu.be/abc".to_string()),
            ..Default::default()
        };
        let record = VideoRecord::from_run("10 Amazing Facts", Category::Science, &uploads);
        assert_eq!(record.views, 0);
        assert_eq!(record.engagement_rate, 0.0);
        assert_eq!(record.youtube_url.as_deref(), Some("https://youtu.be/abc"));
        assert!(record.instagram_url.is_none());
    }

    #[test]
    fn test_doc_id_is_slug() {
        let record =
            VideoRecord::from_run("Science Facts!", Category::Science, &UploadResult::default());
        assert_eq!(record.doc_id(), "science-facts");
    }
}

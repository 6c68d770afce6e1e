//! Typed repositories for video records and topic usage.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::info;

use factline_models::{slugify, Category, TopicUsage, VideoRecord};

use crate::client::StoreClient;
use crate::error::{StoreError, StoreResult};
use crate::types::{Document, FromFirestoreValue, ToFirestoreValue, Value};

/// Collection holding one document per generated video.
const VIDEOS_COLLECTION: &str = "videos";

/// Collection holding per-topic usage counters.
const TOPICS_COLLECTION: &str = "topics_used";

/// Repository for video records.
pub struct VideoRepository {
    client: StoreClient,
}

impl VideoRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Persist a new video record.
    ///
    /// The document ID is the slug of the title; persisting a second
    /// record with the same title fails with
    /// `StoreError::AlreadyExists`.
    pub async fn create(&self, record: &VideoRecord) -> StoreResult<()> {
        let fields = video_record_to_fields(record);
        self.client
            .create_document(VIDEOS_COLLECTION, &record.doc_id(), fields)
            .await?;
        info!("Created video record: {}", record.doc_id());
        Ok(())
    }

    /// Fetch a video record by title.
    pub async fn get(&self, title: &str) -> StoreResult<Option<VideoRecord>> {
        let doc = self
            .client
            .get_document(VIDEOS_COLLECTION, &slugify(title))
            .await?;
        doc.map(|d| document_to_video_record(&d)).transpose()
    }
}

/// Repository for topic usage counters.
///
/// Fully functional, but the pipeline does not call `record_usage` yet.
pub struct TopicUsageRepository {
    client: StoreClient,
}

impl TopicUsageRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Fetch the usage counter for a topic.
    pub async fn get(&self, topic: &str) -> StoreResult<Option<TopicUsage>> {
        let doc = self
            .client
            .get_document(TOPICS_COLLECTION, &slugify(topic))
            .await?;
        doc.map(|d| document_to_topic_usage(&d)).transpose()
    }

    /// Record one use of a topic, creating or incrementing its counter.
    pub async fn record_usage(&self, topic: &str) -> StoreResult<TopicUsage> {
        let doc_id = slugify(topic);
        let now = Utc::now();

        let usage = match self.get(topic).await? {
            Some(existing) => TopicUsage {
                topic: existing.topic,
                last_used: now,
                usage_count: existing.usage_count + 1,
            },
            None => TopicUsage {
                topic: topic.to_string(),
                last_used: now,
                usage_count: 1,
            },
        };

        let fields = topic_usage_to_fields(&usage);
        if usage.usage_count == 1 {
            self.client
                .create_document(TOPICS_COLLECTION, &doc_id, fields)
                .await?;
        } else {
            self.client
                .update_document(TOPICS_COLLECTION, &doc_id, fields, None)
                .await?;
        }
        Ok(usage)
    }
}

// =============================================================================
// Field conversion
// =============================================================================

fn video_record_to_fields(record: &VideoRecord) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert("title".to_string(), record.title.to_firestore_value());
    fields.insert(
        "category".to_string(),
        record.category.as_str().to_firestore_value(),
    );
    fields.insert(
        "created_at".to_string(),
        record.created_at.to_firestore_value(),
    );
    fields.insert(
        "youtube_url".to_string(),
        record.youtube_url.to_firestore_value(),
    );
    fields.insert(
        "youtube_shorts_url".to_string(),
        record.youtube_shorts_url.to_firestore_value(),
    );
    fields.insert(
        "instagram_url".to_string(),
        record.instagram_url.to_firestore_value(),
    );
    fields.insert("views".to_string(), record.views.to_firestore_value());
    fields.insert(
        "engagement_rate".to_string(),
        record.engagement_rate.to_firestore_value(),
    );
    fields
}

fn required_string(doc: &Document, field: &str) -> StoreResult<String> {
    doc.field(field)
        .and_then(String::from_firestore_value)
        .ok_or_else(|| StoreError::invalid_response(format!("missing field: {}", field)))
}

fn optional_string(doc: &Document, field: &str) -> Option<String> {
    doc.field(field).and_then(String::from_firestore_value)
}

fn document_to_video_record(doc: &Document) -> StoreResult<VideoRecord> {
    let title = required_string(doc, "title")?;
    let category: Category = required_string(doc, "category")?
        .parse()
        .map_err(|e| StoreError::invalid_response(format!("bad category: {}", e)))?;
    let created_at = doc
        .field("created_at")
        .and_then(DateTime::<Utc>::from_firestore_value)
        .ok_or_else(|| StoreError::invalid_response("missing field: created_at"))?;

    Ok(VideoRecord {
        title,
        category,
        created_at,
        youtube_url: optional_string(doc, "youtube_url"),
        youtube_shorts_url: optional_string(doc, "youtube_shorts_url"),
        instagram_url: optional_string(doc, "instagram_url"),
        views: doc
            .field("views")
            .and_then(u64::from_firestore_value)
            .unwrap_or(0),
        engagement_rate: doc
            .field("engagement_rate")
            .and_then(f64::from_firestore_value)
            .unwrap_or(0.0),
    })
}

fn topic_usage_to_fields(usage: &TopicUsage) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert("topic".to_string(), usage.topic.to_firestore_value());
    fields.insert(
        "last_used".to_string(),
        usage.last_used.to_firestore_value(),
    );
    fields.insert(
        "usage_count".to_string(),
        usage.usage_count.to_firestore_value(),
    );
    fields
}

fn document_to_topic_usage(doc: &Document) -> StoreResult<TopicUsage> {
    Ok(TopicUsage {
        topic: required_string(doc, "topic")?,
        last_used: doc
            .field("last_used")
            .and_then(DateTime::<Utc>::from_firestore_value)
            .ok_or_else(|| StoreError::invalid_response("missing field: last_used"))?,
        usage_count: doc
            .field("usage_count")
            .and_then(u32::from_firestore_value)
            .unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use factline_models::UploadResult;

    #[test]
    fn test_video_record_field_roundtrip() {
        let uploads = UploadResult {
            youtube_url: Some("https://youtu.be/abc".to_string()),
            youtube_shorts_url: None,
            instagram_url: Some("https://instagram.com/p/xyz".to_string()),
        };
        let record = VideoRecord::from_run("Science Facts", Category::Science, &uploads);

        let doc = Document::new(video_record_to_fields(&record));
        let parsed = document_to_video_record(&doc).unwrap();

        assert_eq!(parsed.title, record.title);
        assert_eq!(parsed.category, record.category);
        assert_eq!(parsed.youtube_url, record.youtube_url);
        assert_eq!(parsed.youtube_shorts_url, None);
        assert_eq!(parsed.views, 0);
    }

    #[test]
    fn test_document_missing_title_is_invalid() {
        let doc = Document::new(HashMap::new());
        assert!(matches!(
            document_to_video_record(&doc),
            Err(StoreError::InvalidResponse(_))
        ));
    }
}

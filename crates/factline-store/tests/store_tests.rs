//! Store integration tests against a mock Firestore endpoint.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use factline_models::{Category, UploadResult, VideoRecord};
use factline_store::{RetryConfig, StoreClient, StoreError, VideoRepository};

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_retries: 2,
        base_delay_ms: 1,
        max_delay_ms: 5,
    }
}

fn client_for(server: &MockServer) -> StoreClient {
    StoreClient::with_static_token(server.uri(), "owner", fast_retry()).unwrap()
}

fn sample_record(title: &str) -> VideoRecord {
    VideoRecord::from_run(title, Category::Science, &UploadResult::default())
}

fn created_document_body() -> serde_json::Value {
    serde_json::json!({
        "name": "projects/p/databases/(default)/documents/videos/science-facts",
        "fields": {},
        "createTime": "2026-08-06T09:00:00Z",
        "updateTime": "2026-08-06T09:00:00Z"
    })
}

#[tokio::test]
async fn create_video_record_uses_title_slug_as_document_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/videos"))
        .and(query_param("documentId", "science-facts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_document_body()))
        .expect(1)
        .mount(&server)
        .await;

    let repo = VideoRepository::new(client_for(&server));
    repo.create(&sample_record("Science Facts")).await.unwrap();
}

#[tokio::test]
async fn duplicate_title_raises_uniqueness_violation() {
    let server = MockServer::start().await;

    // The storage layer answers 409 for an existing document ID.
    Mock::given(method("POST"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "error": {
                "code": 409,
                "message": "Document already exists",
                "status": "ALREADY_EXISTS"
            }
        })))
        .mount(&server)
        .await;

    let repo = VideoRepository::new(client_for(&server));
    let err = repo.create(&sample_record("Science Facts")).await.unwrap_err();

    assert!(matches!(err, StoreError::AlreadyExists(_)));
}

#[tokio::test]
async fn get_missing_record_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/unknown-title"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let repo = VideoRepository::new(client_for(&server));
    let record = repo.get("Unknown Title").await.unwrap();
    assert!(record.is_none());
}

#[tokio::test]
async fn transient_server_errors_are_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_document_body()))
        .mount(&server)
        .await;

    let repo = VideoRepository::new(client_for(&server));
    repo.create(&sample_record("Science Facts")).await.unwrap();
}

#[tokio::test]
async fn get_parses_stored_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/science-facts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/videos/science-facts",
            "fields": {
                "title": { "stringValue": "Science Facts" },
                "category": { "stringValue": "science" },
                "created_at": { "timestampValue": "2026-08-06T09:00:00Z" },
                "youtube_url": { "stringValue": "https://youtu.be/abc" },
                "youtube_shorts_url": { "nullValue": null },
                "instagram_url": { "nullValue": null },
                "views": { "integerValue": "0" },
                "engagement_rate": { "doubleValue": 0.0 }
            }
        })))
        .mount(&server)
        .await;

    let repo = VideoRepository::new(client_for(&server));
    let record = repo.get("Science Facts").await.unwrap().unwrap();
    assert_eq!(record.title, "Science Facts");
    assert_eq!(record.category, Category::Science);
    assert_eq!(record.youtube_url.as_deref(), Some("https://youtu.be/abc"));
    assert!(record.youtube_shorts_url.is_none());
}

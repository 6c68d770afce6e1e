//! Upload client tests against mock platform endpoints.

use std::path::PathBuf;

use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use factline_models::{
    Category, ContentBundle, FactBundle, Provenance, RenderOutcome, Script, SeoMetadata,
    VideoFileSet,
};
use factline_upload::{
    InstagramClient, InstagramConfig, PlatformUploader, YouTubeClient, YouTubeConfig,
    YouTubeCredentials,
};

fn write_fake_video(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"\x00\x00\x00\x18ftypmp42fake").unwrap();
    path
}

fn youtube_for(server: &MockServer) -> YouTubeClient {
    let credentials = YouTubeCredentials {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "refresh".to_string(),
    };
    let config = YouTubeConfig::new(credentials).with_bases(server.uri(), server.uri());
    YouTubeClient::new(config).unwrap()
}

fn instagram_for(server: &MockServer) -> InstagramClient {
    let config = InstagramConfig::new("17841400000000000", "token").with_base_url(server.uri());
    InstagramClient::new(config).unwrap()
}

fn sample_content() -> ContentBundle {
    let bundle = FactBundle::new(Category::Science, vec![], Provenance::live("test"));
    ContentBundle {
        title: "Science Facts".to_string(),
        script: Script::assemble("h", "i", "l", "c"),
        category: bundle.category,
        metadata: SeoMetadata {
            description: "Discover amazing facts.".to_string(),
            tags: vec!["science".to_string()],
            thumbnail_text: "TOP 10\nSCIENCE\nFACTS".to_string(),
        },
        facts: bundle.facts,
        estimated_duration_secs: 60,
    }
}

async fn mount_youtube_happy_path(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "ya29.test",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/upload/youtube/v3/videos"))
        .and(header_exists("authorization"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Location", format!("{}/resumable/session-1", server.uri()).as_str()),
        )
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/resumable/session-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "vid123",
            "kind": "youtube#video"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn youtube_resumable_upload_returns_watch_url() {
    let server = MockServer::start().await;
    mount_youtube_happy_path(&server).await;

    let dir = TempDir::new().unwrap();
    let video = write_fake_video(&dir, "long.mp4");

    let url = youtube_for(&server)
        .upload(&video, "Science Facts", "desc", &["science".to_string()])
        .await
        .unwrap();

    assert_eq!(url, "https://youtu.be/vid123");
}

#[tokio::test]
async fn youtube_short_upload_returns_shorts_url() {
    let server = MockServer::start().await;
    mount_youtube_happy_path(&server).await;

    let dir = TempDir::new().unwrap();
    let video = write_fake_video(&dir, "short.mp4");

    let url = youtube_for(&server)
        .upload_short(&video, "Science Facts", "desc", &[])
        .await
        .unwrap();

    assert_eq!(url, "https://youtube.com/shorts/vid123");
}

#[tokio::test]
async fn instagram_two_step_publish_returns_post_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/17841400000000000/media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "container-9"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/17841400000000000/media_publish"))
        .and(body_string_contains("creation_id=container-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "180000001",
            "shortcode": "CxYz12"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let video = write_fake_video(&dir, "short.mp4");

    let url = instagram_for(&server)
        .upload_video(&video, "caption")
        .await
        .unwrap();

    assert_eq!(url, "https://instagram.com/p/CxYz12");
}

#[tokio::test]
async fn one_platform_failing_does_not_block_the_other() {
    let server = MockServer::start().await;
    mount_youtube_happy_path(&server).await;

    // Instagram container creation is down.
    Mock::given(method("POST"))
        .and(path("/17841400000000000/media"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let long = write_fake_video(&dir, "long.mp4");
    let short = write_fake_video(&dir, "short.mp4");

    let files = VideoFileSet {
        long_form: RenderOutcome::rendered(&long),
        short_form: RenderOutcome::rendered(&short),
        voiceover: RenderOutcome::rendered(dir.path().join("vo.mp3")),
    };

    let uploader = PlatformUploader::new(
        Some(youtube_for(&server)),
        Some(instagram_for(&server)),
    );
    let results = uploader.upload_to_platforms(&files, &sample_content()).await;

    assert!(results.youtube_url.is_some());
    assert!(results.youtube_shorts_url.is_some());
    assert!(results.instagram_url.is_none());
}

#[tokio::test]
async fn missing_artifacts_skip_uploads_entirely() {
    // No mocks mounted: any request would fail the test via error URLs.
    let server = MockServer::start().await;
    let uploader = PlatformUploader::new(Some(youtube_for(&server)), None);

    let files = VideoFileSet {
        long_form: RenderOutcome::skipped("render failed"),
        short_form: RenderOutcome::skipped("render failed"),
        voiceover: RenderOutcome::skipped("tts failed"),
    };

    let results = uploader.upload_to_platforms(&files, &sample_content()).await;
    assert!(results.is_empty());
}

//! Speech client tests against a mock TTS backend.

use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use factline_tts::{SpeechClient, SpeechConfig, TtsError};

fn client_for(server: &MockServer) -> SpeechClient {
    let config = SpeechConfig::new("test-key", "test-voice").with_base_url(server.uri());
    SpeechClient::new(config).unwrap()
}

#[tokio::test]
async fn synthesize_writes_audio_bytes() {
    let server = MockServer::start().await;
    let audio = b"ID3\x04fake-mp3-bytes".to_vec();

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/test-voice"))
        .and(header("xi-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("voiceover.mp3");

    client_for(&server)
        .synthesize_to_file("Welcome back to the channel!", &out)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&out).unwrap(), audio);
}

#[tokio::test]
async fn synthesize_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("voiceover.mp3");

    let err = client_for(&server)
        .synthesize_to_file("hello", &out)
        .await
        .unwrap_err();

    match err {
        TtsError::Api { status, .. } => assert_eq!(status, 401),
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(!out.exists());
}

//! HTTP text-to-speech client.
//!
//! Synthesizes narration audio by POSTing script text to an
//! ElevenLabs-compatible REST endpoint and writing the returned MP3
//! bytes to disk.

pub mod error;

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

pub use error::{TtsError, TtsResult};

/// Default production endpoint.
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Default synthesis model.
const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// Speech synthesis configuration.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// API base URL; overridable for tests.
    pub base_url: String,
    /// API key sent in the `xi-api-key` header.
    pub api_key: String,
    /// Voice to synthesize with.
    pub voice_id: String,
    /// Synthesis model.
    pub model_id: String,
    /// Per-request timeout. Long scripts take a while.
    pub timeout: Duration,
}

impl SpeechConfig {
    pub fn new(api_key: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            voice_id: voice_id.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout: Duration::from_secs(300),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

/// Client for the speech synthesis backend.
pub struct SpeechClient {
    http: Client,
    config: SpeechConfig,
}

impl SpeechClient {
    pub fn new(config: SpeechConfig) -> TtsResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("factline-tts/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Synthesize `text` and write the MP3 response to `output`.
    pub async fn synthesize_to_file(&self, text: &str, output: impl AsRef<Path>) -> TtsResult<()> {
        let output = output.as_ref();
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url, self.config.voice_id
        );

        debug!("Synthesizing {} chars of narration", text.len());

        let response = self
            .http
            .post(&url)
            .header("xi-api-key", &self.config.api_key)
            .json(&SynthesisRequest {
                text,
                model_id: &self.config.model_id,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::api(status.as_u16(), body));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(TtsError::api(status.as_u16(), "empty audio response"));
        }

        if let Some(parent) = output.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(output, &audio).await?;

        info!(
            "Wrote {} bytes of narration to {}",
            audio.len(),
            output.display()
        );
        Ok(())
    }
}

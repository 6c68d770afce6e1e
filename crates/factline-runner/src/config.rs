//! Runner configuration.
//!
//! All component configuration is resolved here from the environment
//! and injected explicitly; no component reads credentials from the
//! working directory on its own.

use std::path::PathBuf;

use factline_sources::SourcesConfig;
use factline_store::StoreConfig;
use factline_tts::SpeechConfig;
use factline_upload::{InstagramConfig, YouTubeConfig, YouTubeCredentials};

use crate::error::{RunnerError, RunnerResult};

/// Default ElevenLabs voice used for narration.
const DEFAULT_VOICE_ID: &str = "EXAVITQu4vr4xnSDxMaL";

/// How the runner executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Generate one day's content and exit.
    Once,
    /// Poll hourly and fire the daily (and weekly) triggers.
    Scheduled,
}

/// Full runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub run_mode: RunMode,
    /// Fixed RNG seed for template selection; unset derives one from
    /// the run date.
    pub content_seed: Option<u64>,

    pub assets_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Background music mixed under the long-form voiceover, if the
    /// file exists.
    pub background_music: PathBuf,
    /// Font for card text; drawtext falls back to the system default.
    pub font_file: PathBuf,

    pub sources: SourcesConfig,
    pub store: StoreConfig,
    /// Unset when no TTS key is configured; videos render silent.
    pub speech: Option<SpeechConfig>,
    /// Unset when YouTube credentials are missing; uploads are skipped.
    pub youtube: Option<YouTubeConfig>,
    /// Unset when Instagram credentials are missing; uploads are skipped.
    pub instagram: Option<InstagramConfig>,
}

impl RunnerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> RunnerResult<Self> {
        let run_mode = match std::env::var("RUN_MODE").as_deref() {
            Ok("scheduled") => RunMode::Scheduled,
            Ok("once") | Err(_) => RunMode::Once,
            Ok(other) => {
                return Err(RunnerError::config_error(format!(
                    "RUN_MODE must be 'once' or 'scheduled', got '{}'",
                    other
                )))
            }
        };

        let assets_dir = PathBuf::from(
            std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
        );
        let temp_dir =
            PathBuf::from(std::env::var("TEMP_DIR").unwrap_or_else(|_| "temp".to_string()));
        let output_dir = PathBuf::from(
            std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "generated_videos".to_string()),
        );

        let background_music = assets_dir.join("background_music.mp3");
        let font_file = std::env::var("FONT_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| assets_dir.join("fonts/arial-bold.ttf"));

        let speech = std::env::var("ELEVENLABS_API_KEY").ok().map(|key| {
            let voice = std::env::var("ELEVENLABS_VOICE_ID")
                .unwrap_or_else(|_| DEFAULT_VOICE_ID.to_string());
            let mut config = SpeechConfig::new(key, voice);
            if let Ok(base) = std::env::var("TTS_API_BASE") {
                config = config.with_base_url(base);
            }
            config
        });

        let youtube = match (
            std::env::var("YOUTUBE_CLIENT_ID"),
            std::env::var("YOUTUBE_CLIENT_SECRET"),
            std::env::var("YOUTUBE_REFRESH_TOKEN"),
        ) {
            (Ok(client_id), Ok(client_secret), Ok(refresh_token)) => {
                Some(YouTubeConfig::new(YouTubeCredentials {
                    client_id,
                    client_secret,
                    refresh_token,
                }))
            }
            _ => None,
        };

        let instagram = match (
            std::env::var("INSTAGRAM_USER_ID"),
            std::env::var("INSTAGRAM_ACCESS_TOKEN"),
        ) {
            (Ok(user_id), Ok(token)) => Some(InstagramConfig::new(user_id, token)),
            _ => None,
        };

        let content_seed = std::env::var("CONTENT_SEED")
            .ok()
            .and_then(|s| s.parse().ok());

        Ok(Self {
            run_mode,
            content_seed,
            assets_dir,
            temp_dir,
            output_dir,
            background_music,
            font_file,
            sources: SourcesConfig::from_env(),
            store: StoreConfig::from_env()?,
            speech,
            youtube,
            instagram,
        })
    }

    /// Create the temp and output directories.
    pub fn ensure_directories(&self) -> RunnerResult<()> {
        for dir in [&self.assets_dir, &self.temp_dir, &self.output_dir] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

//! Runner error types.

use thiserror::Error;

pub type RunnerResult<T> = Result<T, RunnerError>;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Render failed: {0}")]
    RenderFailed(String),

    #[error("Speech synthesis error: {0}")]
    Tts(#[from] factline_tts::TtsError),

    #[error("Media error: {0}")]
    Media(#[from] factline_media::MediaError),

    #[error("Store error: {0}")]
    Store(#[from] factline_store::StoreError),

    #[error("Upload error: {0}")]
    Upload(#[from] factline_upload::UploadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunnerError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn render_failed(msg: impl Into<String>) -> Self {
        Self::RenderFailed(msg.into())
    }
}

//! Instagram Graph-style upload client.
//!
//! Two-step publish: create a media container from the video file and
//! caption, then publish the container. The caption carries the fixed
//! hashtag block the channel uses everywhere.

use std::path::Path;

use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{PlatformResult, UploadError};

/// Instagram client configuration.
#[derive(Debug, Clone)]
pub struct InstagramConfig {
    /// Graph API base, e.g. `https://graph.instagram.com`.
    pub base_url: String,
    /// Numeric account ID.
    pub user_id: String,
    /// Long-lived access token, injected by the caller.
    pub access_token: String,
}

impl InstagramConfig {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: "https://graph.instagram.com".to_string(),
            user_id: user_id.into(),
            access_token: access_token.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct ContainerResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct PublishResponse {
    id: String,
    #[serde(default)]
    shortcode: Option<String>,
}

/// Client for Instagram video uploads.
pub struct InstagramClient {
    http: Client,
    config: InstagramConfig,
}

impl InstagramClient {
    pub fn new(config: InstagramConfig) -> PlatformResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("factline-upload/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Build the caption posted with each video.
    pub fn caption(title: &str, description: &str) -> String {
        format!(
            "{}\n\n{}\n\n#educationalcontent #facts #learning",
            title, description
        )
    }

    /// Upload a video and return its post URL.
    pub async fn upload_video(&self, file: &Path, caption: &str) -> PlatformResult<String> {
        if !file.exists() {
            return Err(UploadError::FileNotFound(file.to_path_buf()));
        }

        let container_id = self.create_container(file, caption).await?;
        let post = self.publish(&container_id).await?;

        let code = post.shortcode.unwrap_or(post.id);
        let url = format!("https://instagram.com/p/{}", code);
        info!("Video uploaded successfully to Instagram: {}", url);
        Ok(url)
    }

    async fn create_container(&self, file: &Path, caption: &str) -> PlatformResult<String> {
        let url = format!("{}/{}/media", self.config.base_url, self.config.user_id);
        debug!("Creating Instagram media container for {}", file.display());

        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video.mp4".to_string());

        let form = multipart::Form::new()
            .text("media_type", "REELS")
            .text("caption", caption.to_string())
            .text("access_token", self.config.access_token.clone())
            .part(
                "video_file",
                multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str("video/mp4")
                    .map_err(|e| UploadError::invalid_response(e.to_string()))?,
            );

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::api(status.as_u16(), body));
        }

        let container: ContainerResponse = response.json().await?;
        Ok(container.id)
    }

    async fn publish(&self, container_id: &str) -> PlatformResult<PublishResponse> {
        let url = format!(
            "{}/{}/media_publish",
            self.config.base_url, self.config.user_id
        );

        let response = self
            .http
            .post(&url)
            .form(&[
                ("creation_id", container_id),
                ("access_token", self.config.access_token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::api(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}

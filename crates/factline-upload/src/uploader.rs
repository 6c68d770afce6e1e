//! Platform routing for rendered artifacts.

use reqwest::Client;
use tracing::{error, info, warn};

use factline_models::{ContentBundle, UploadResult, VideoFileSet};

use crate::instagram::InstagramClient;
use crate::youtube::YouTubeClient;

/// Routes rendered files to the configured platforms.
///
/// Long-form goes to YouTube; short-form goes to Instagram and to
/// YouTube Shorts. Every upload runs independently: one platform
/// failing (or being unconfigured) only leaves its URL absent.
pub struct PlatformUploader {
    youtube: Option<YouTubeClient>,
    instagram: Option<InstagramClient>,
    http: Client,
}

impl PlatformUploader {
    pub fn new(youtube: Option<YouTubeClient>, instagram: Option<InstagramClient>) -> Self {
        Self {
            youtube,
            instagram,
            http: Client::new(),
        }
    }

    /// Upload whatever artifacts exist to whatever platforms are
    /// configured.
    pub async fn upload_to_platforms(
        &self,
        files: &VideoFileSet,
        content: &ContentBundle,
    ) -> UploadResult {
        let mut results = UploadResult::default();
        let metadata = &content.metadata;

        match files.long_form_path() {
            Some(path) => match &self.youtube {
                Some(youtube) => {
                    match youtube
                        .upload(path, &content.title, &metadata.description, &metadata.tags)
                        .await
                    {
                        Ok(url) => results.youtube_url = Some(url),
                        Err(e) => error!("Error uploading to YouTube: {}", e),
                    }
                }
                None => warn!("YouTube not configured; skipping long-form upload"),
            },
            None => warn!("No long-form video to upload"),
        }

        if let Some(path) = files.short_form_path() {
            match &self.instagram {
                Some(instagram) => {
                    let caption = InstagramClient::caption(&content.title, &metadata.description);
                    match instagram.upload_video(path, &caption).await {
                        Ok(url) => results.instagram_url = Some(url),
                        Err(e) => error!("Error uploading to Instagram: {}", e),
                    }
                }
                None => warn!("Instagram not configured; skipping short-form upload"),
            }

            match &self.youtube {
                Some(youtube) => {
                    match youtube
                        .upload_short(path, &content.title, &metadata.description, &metadata.tags)
                        .await
                    {
                        Ok(url) => results.youtube_shorts_url = Some(url),
                        Err(e) => error!("Error uploading to YouTube Shorts: {}", e),
                    }
                }
                None => warn!("YouTube not configured; skipping Shorts upload"),
            }
        } else {
            warn!("No short-form video to upload");
        }

        if results.is_empty() {
            warn!("No uploads succeeded this run");
        } else {
            info!("Upload results: {:?}", results);
        }
        results
    }

    /// Verify an upload by fetching its URL; true on HTTP 200.
    pub async fn verify_upload(&self, platform: &str, url: &str) -> bool {
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                info!("Successfully verified upload on {}: {}", platform, url);
                true
            }
            Ok(response) => {
                warn!(
                    "Could not verify upload on {} ({}): {}",
                    platform,
                    response.status(),
                    url
                );
                false
            }
            Err(e) => {
                error!("Error verifying upload on {}: {}", platform, e);
                false
            }
        }
    }
}

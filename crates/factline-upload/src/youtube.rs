//! YouTube Data API v3 upload client.
//!
//! Auth uses an injected OAuth refresh token; access tokens are
//! exchanged at the token endpoint and cached until an expiry margin.
//! Uploads use the resumable protocol: initiate a session, then PUT the
//! file bytes to the returned session URL.

use std::path::Path;
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{PlatformResult, UploadError};

/// YouTube "Education" category.
const EDUCATION_CATEGORY_ID: &str = "27";

/// Refresh the access token this long before it expires.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// OAuth client credentials plus a long-lived refresh token.
///
/// Injected by the caller; this crate never reads credential files from
/// the working directory.
#[derive(Debug, Clone)]
pub struct YouTubeCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// YouTube client configuration.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub credentials: YouTubeCredentials,
    /// OAuth token endpoint base, e.g. `https://oauth2.googleapis.com`.
    pub oauth_base: String,
    /// API base, e.g. `https://www.googleapis.com`.
    pub api_base: String,
}

impl YouTubeConfig {
    pub fn new(credentials: YouTubeCredentials) -> Self {
        Self {
            credentials,
            oauth_base: "https://oauth2.googleapis.com".to_string(),
            api_base: "https://www.googleapis.com".to_string(),
        }
    }

    pub fn with_bases(
        mut self,
        oauth_base: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        self.oauth_base = oauth_base.into();
        self.api_base = api_base.into();
        self
    }
}

struct CachedAccessToken {
    access_token: String,
    expires_at: Instant,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct InsertResponse {
    id: String,
}

/// Client for YouTube video uploads.
pub struct YouTubeClient {
    http: Client,
    config: YouTubeConfig,
    token: Mutex<Option<CachedAccessToken>>,
}

impl YouTubeClient {
    pub fn new(config: YouTubeConfig) -> PlatformResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("factline-upload/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config,
            token: Mutex::new(None),
        })
    }

    /// Get a usable access token, refreshing through the OAuth endpoint
    /// when the cached one is missing or near expiry.
    async fn access_token(&self) -> PlatformResult<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() + TOKEN_REFRESH_MARGIN < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        debug!("Refreshing YouTube access token");
        let creds = &self.config.credentials;
        let response = self
            .http
            .post(format!("{}/token", self.config.oauth_base))
            .form(&[
                ("client_id", creds.client_id.as_str()),
                ("client_secret", creds.client_secret.as_str()),
                ("refresh_token", creds.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::auth(format!(
                "token refresh failed ({}): {}",
                status, body
            )));
        }

        let token: TokenResponse = response.json().await?;
        let expires_at =
            Instant::now() + Duration::from_secs(token.expires_in.unwrap_or(3600));
        let access_token = token.access_token.clone();
        *cached = Some(CachedAccessToken {
            access_token: token.access_token,
            expires_at,
        });
        Ok(access_token)
    }

    /// Upload a video and return its watch URL.
    pub async fn upload(
        &self,
        file: &Path,
        title: &str,
        description: &str,
        tags: &[String],
    ) -> PlatformResult<String> {
        let id = self.upload_video(file, title, description, tags).await?;
        let url = format!("https://youtu.be/{}", id);
        info!("Video uploaded successfully to YouTube: {}", url);
        Ok(url)
    }

    /// Upload a vertical video as a Short and return its URL.
    pub async fn upload_short(
        &self,
        file: &Path,
        title: &str,
        description: &str,
        tags: &[String],
    ) -> PlatformResult<String> {
        let (title, description, tags) = shorts_metadata(title, description, tags);
        let id = self.upload_video(file, &title, &description, &tags).await?;
        let url = format!("https://youtube.com/shorts/{}", id);
        info!("Short uploaded successfully to YouTube: {}", url);
        Ok(url)
    }

    /// Run the resumable upload protocol, returning the new video ID.
    async fn upload_video(
        &self,
        file: &Path,
        title: &str,
        description: &str,
        tags: &[String],
    ) -> PlatformResult<String> {
        if !file.exists() {
            return Err(UploadError::FileNotFound(file.to_path_buf()));
        }

        let token = self.access_token().await?;

        // Uploads start private; visibility is flipped manually after
        // review.
        let body = json!({
            "snippet": {
                "title": title,
                "description": description,
                "tags": tags,
                "categoryId": EDUCATION_CATEGORY_ID,
            },
            "status": {
                "privacyStatus": "private",
                "selfDeclaredMadeForKids": false,
            }
        });

        let init_url = format!(
            "{}/upload/youtube/v3/videos?uploadType=resumable&part=snippet,status",
            self.config.api_base
        );
        let response = self
            .http
            .post(&init_url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::api(status.as_u16(), body));
        }

        let session_url = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                UploadError::invalid_response("resumable init returned no session URL")
            })?;

        debug!("Uploading {} to resumable session", file.display());
        let bytes = tokio::fs::read(file).await?;
        let response = self
            .http
            .put(&session_url)
            .bearer_auth(&token)
            .header(CONTENT_TYPE, "video/mp4")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::api(status.as_u16(), body));
        }

        let inserted: InsertResponse = response.json().await?;
        Ok(inserted.id)
    }
}

/// Rewrite metadata for a Shorts upload.
fn shorts_metadata(
    title: &str,
    description: &str,
    tags: &[String],
) -> (String, String, Vec<String>) {
    let shorts_title = format!("{} #Shorts", title);
    let shorts_description = format!(
        "{}\n\n#Shorts #EducationalShorts #LearnOnShorts",
        description
    );
    let mut shorts_tags = tags.to_vec();
    shorts_tags.extend(
        ["shorts", "educational shorts", "learning"]
            .iter()
            .map(|t| t.to_string()),
    );
    (shorts_title, shorts_description, shorts_tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorts_metadata_rewrite() {
        let (title, description, tags) = shorts_metadata(
            "Science Facts",
            "Discover amazing facts.",
            &["science".to_string()],
        );
        assert_eq!(title, "Science Facts #Shorts");
        assert!(description.ends_with("#Shorts #EducationalShorts #LearnOnShorts"));
        assert_eq!(tags, vec!["science", "shorts", "educational shorts", "learning"]);
    }
}

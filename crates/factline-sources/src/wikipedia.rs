//! Wikipedia REST page-summary client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// Page summary as returned by `/page/summary/{title}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSummary {
    pub title: String,
    #[serde(default)]
    pub extract: String,
    #[serde(default)]
    pub content_urls: Option<ContentUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentUrls {
    #[serde(default)]
    pub desktop: Option<PageUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageUrls {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageSummary {
    /// Canonical desktop page URL, if present.
    pub fn page_url(&self) -> Option<&str> {
        self.content_urls
            .as_ref()
            .and_then(|urls| urls.desktop.as_ref())
            .and_then(|desktop| desktop.page.as_deref())
    }
}

/// Client for the Wikipedia REST API.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: Client,
    base: String,
}

impl WikipediaClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("factline/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base: base.into(),
        }
    }

    /// Fetch the summary for a page title.
    ///
    /// Titles use spaces; they are percent-encoded (spaces as underscores,
    /// Wikipedia's canonical form) before hitting the API.
    pub async fn summary(&self, title: &str) -> SourceResult<PageSummary> {
        let encoded = urlencoding::encode(&title.replace(' ', "_")).into_owned();
        let url = format!("{}/page/summary/{}", self.base, encoded);
        debug!("Fetching page summary: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::api(status.as_u16(), url));
        }

        let summary: PageSummary = response.json().await?;
        if summary.extract.is_empty() {
            return Err(SourceError::invalid_payload(format!(
                "empty extract for page {}",
                title
            )));
        }
        Ok(summary)
    }
}

//! NASA Astronomy Picture of the Day client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// APOD payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Apod {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: String,
}

/// Client for the NASA APOD endpoint.
#[derive(Debug, Clone)]
pub struct ApodClient {
    http: Client,
    base: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(base: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("factline/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base: base.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch today's astronomy picture.
    ///
    /// Any non-200 status is an error; the collector treats that as "no
    /// APOD entry today" rather than a failed run.
    pub async fn picture_of_the_day(&self) -> SourceResult<Apod> {
        let url = format!("{}/planetary/apod?api_key={}", self.base, self.api_key);
        debug!("Fetching APOD");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::api(status.as_u16(), url));
        }

        let apod: Apod = response.json().await?;
        Ok(apod)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apod_payload_parsing() {
        let payload = serde_json::json!({
            "title": "The Horsehead Nebula",
            "explanation": "One of the most identifiable nebulae in the sky.",
            "url": "https://apod.nasa.gov/apod/image/horsehead.jpg",
            "date": "2026-08-06"
        });
        let apod: Apod = serde_json::from_value(payload).unwrap();
        assert_eq!(apod.title, "The Horsehead Nebula");
        assert!(!apod.explanation.is_empty());
    }

    #[test]
    fn test_apod_tolerates_missing_fields() {
        let apod: Apod = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(apod.title.is_empty());
    }
}

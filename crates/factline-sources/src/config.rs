//! Source endpoint configuration.

use std::time::Duration;

/// Base URLs and credentials for the public data sources.
///
/// Defaults point at the production endpoints; tests override the bases
/// to hit a local mock server.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    /// REST Countries base, e.g. `https://restcountries.com/v3.1`.
    pub countries_base: String,
    /// Wikipedia REST base, e.g. `https://en.wikipedia.org/api/rest_v1`.
    pub wikipedia_base: String,
    /// NASA API base, e.g. `https://api.nasa.gov`.
    pub apod_base: String,
    /// NASA API key; the public demo key works with tight rate limits.
    pub nasa_api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            countries_base: "https://restcountries.com/v3.1".to_string(),
            wikipedia_base: "https://en.wikipedia.org/api/rest_v1".to_string(),
            apod_base: "https://api.nasa.gov".to_string(),
            nasa_api_key: "DEMO_KEY".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl SourcesConfig {
    /// Create config from environment variables, with production defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            countries_base: std::env::var("COUNTRIES_API_BASE")
                .unwrap_or(defaults.countries_base),
            wikipedia_base: std::env::var("WIKIPEDIA_API_BASE")
                .unwrap_or(defaults.wikipedia_base),
            apod_base: std::env::var("NASA_API_BASE").unwrap_or(defaults.apod_base),
            nasa_api_key: std::env::var("NASA_API_KEY").unwrap_or(defaults.nasa_api_key),
            timeout: Duration::from_secs(
                std::env::var("SOURCES_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
            ),
        }
    }
}

//! REST Countries client.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// One country as returned by the REST Countries v3.1 API.
///
/// Only the fields the pipeline reads are modeled; the payload carries
/// far more.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub languages: Option<HashMap<String, String>>,
    #[serde(default)]
    pub currencies: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub flags: Option<CountryFlags>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryFlags {
    #[serde(default)]
    pub png: Option<String>,
}

impl Country {
    /// First listed capital, if any.
    pub fn first_capital(&self) -> Option<&str> {
        self.capital
            .as_deref()
            .and_then(|caps| caps.first())
            .map(String::as_str)
    }

    /// Language names, in map order.
    pub fn language_names(&self) -> Vec<String> {
        self.languages
            .as_ref()
            .map(|langs| langs.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Currency codes, in map order.
    pub fn currency_codes(&self) -> Vec<String> {
        self.currencies
            .as_ref()
            .map(|curs| curs.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Client for the REST Countries API.
#[derive(Debug, Clone)]
pub struct CountriesClient {
    http: Client,
    base: String,
}

impl CountriesClient {
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

    /// Fetch the full country registry.
    pub async fn all(&self) -> SourceResult<Vec<Country>> {
        let url = format!("{}/all", self.base);
        debug!("Fetching country registry from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::api(status.as_u16(), url));
        }

        let countries: Vec<Country> = response.json().await?;
        if countries.is_empty() {
            return Err(SourceError::invalid_payload("empty country registry"));
        }
        Ok(countries)
    }
}

//! Fact collection from public data sources.
//!
//! This crate provides:
//! - HTTP clients for REST Countries, Wikipedia page summaries and NASA APOD
//! - Sentence-level "interesting fact" extraction
//! - Hard-coded fallback data per category
//! - The `DataCollector` that turns a category into a `FactBundle`
//!
//! Collection never fails outright: a dead network degrades to the
//! category's fallback set, and the bundle's provenance records which
//! path was taken.

pub mod apod;
pub mod collector;
pub mod config;
pub mod countries;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod wikipedia;

pub use apod::{Apod, ApodClient};
pub use collector::DataCollector;
pub use config::SourcesConfig;
pub use countries::{CountriesClient, Country};
pub use error::{SourceError, SourceResult};
pub use wikipedia::{PageSummary, WikipediaClient};

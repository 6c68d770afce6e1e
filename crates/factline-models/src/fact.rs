//! Collected fact records.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One list item's worth of collected data.
///
/// The shape is category-dependent: country records carry capital,
/// population and area; topic records carry a summary. Fields the
/// collectors do not populate stay `None`, and anything without a named
/// field lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FactRecord {
    /// Country name or topic title.
    pub topic: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interesting_fact: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub currencies: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Category-specific annotations (discovery year, importance, ...).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

impl FactRecord {
    /// Start a country-shaped record.
    pub fn country(name: impl Into<String>) -> Self {
        Self {
            topic: name.into(),
            ..Default::default()
        }
    }

    /// Start a topic-shaped record.
    pub fn topic(title: impl Into<String>) -> Self {
        Self {
            topic: title.into(),
            ..Default::default()
        }
    }

    /// Whether this record describes a country (vs. an abstract topic).
    pub fn is_country(&self) -> bool {
        self.population.is_some() || self.capital.is_some()
    }
}

/// Where a bundle's data came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Provenance {
    /// Fetched from the named live source(s).
    Live { source: String },
    /// Hard-coded fallback data after a collection failure.
    Fallback,
}

impl Provenance {
    pub fn live(source: impl Into<String>) -> Self {
        Self::Live {
            source: source.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Provenance::Fallback)
    }
}

/// The full output of one collection run for a category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FactBundle {
    pub category: Category,
    pub facts: Vec<FactRecord>,
    pub provenance: Provenance,
    /// Number of distinct topics that produced a record.
    pub topics_covered: usize,
}

impl FactBundle {
    pub fn new(category: Category, facts: Vec<FactRecord>, provenance: Provenance) -> Self {
        let topics_covered = facts.len();
        Self {
            category,
            facts,
            provenance,
            topics_covered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_record_shape() {
        let mut record = FactRecord::country("Japan");
        record.capital = Some("Tokyo".to_string());
        record.population = Some(125_700_000);
        assert!(record.is_country());
    }

    #[test]
    fn test_topic_record_shape() {
        let mut record = FactRecord::topic("Black hole");
        record.summary = Some("A region of spacetime...".to_string());
        assert!(!record.is_country());
    }

    #[test]
    fn test_provenance_fallback() {
        assert!(Provenance::Fallback.is_fallback());
        assert!(!Provenance::live("Wikipedia").is_fallback());
    }
}

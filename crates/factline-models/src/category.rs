//! Content categories.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of content categories the pipeline can produce.
///
/// Every category has its own data-collection strategy, template pool,
/// and tag set. Unrecognized category names are rejected at parse time
/// rather than falling back to a generic template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Geography,
    History,
    Science,
    Technology,
    Psychology,
    Space,
    Trending,
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl Category {
    /// All supported categories, in calendar order.
    pub const ALL: [Category; 7] = [
        Category::Geography,
        Category::History,
        Category::Science,
        Category::Technology,
        Category::Psychology,
        Category::Space,
        Category::Trending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Geography => "geography",
            Category::History => "history",
            Category::Science => "science",
            Category::Technology => "technology",
            Category::Psychology => "psychology",
            Category::Space => "space",
            Category::Trending => "trending",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "geography" => Ok(Category::Geography),
            "history" => Ok(Category::History),
            "science" => Ok(Category::Science),
            "technology" => Ok(Category::Technology),
            "psychology" => Ok(Category::Psychology),
            "space" => Ok(Category::Space),
            "trending" => Ok(Category::Trending),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_categories() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "general".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError("general".to_string()));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Space".parse::<Category>().unwrap(), Category::Space);
    }
}

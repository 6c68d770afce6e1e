//! Upload results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// URLs returned by the platforms that accepted an upload.
///
/// A `None` field means that platform's upload failed or was skipped;
/// uploads are independent, so any combination is possible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UploadResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_shorts_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
}

impl UploadResult {
    pub fn is_empty(&self) -> bool {
        self.youtube_url.is_none()
            && self.youtube_shorts_url.is_none()
            && self.instagram_url.is_none()
    }

    /// Platform names that did not return a URL.
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for (name, url) in [
            ("youtube", &self.youtube_url),
            ("youtube_shorts", &self.youtube_shorts_url),
            ("instagram", &self.instagram_url),
        ] {
            if url.is_none() {
                missing.push(name.to_string());
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_missing() {
        let mut result = UploadResult::default();
        assert!(result.is_empty());

        result.youtube_url = Some("https://youtu.be/abc123".to_string());
        assert!(!result.is_empty());
        assert_eq!(result.missing(), vec!["youtube_shorts", "instagram"]);
    }
}

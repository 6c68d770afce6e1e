//! Rendered artifact sets and run outcomes.

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of rendering one artifact.
///
/// A skipped artifact carries the reason so callers can distinguish a
/// degraded run from a fully successful one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum RenderOutcome {
    Rendered { path: PathBuf },
    Skipped { reason: String },
}

impl RenderOutcome {
    pub fn rendered(path: impl Into<PathBuf>) -> Self {
        Self::Rendered { path: path.into() }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            RenderOutcome::Rendered { path } => Some(path),
            RenderOutcome::Skipped { .. } => None,
        }
    }
}

/// Paths to the artifacts of one render run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoFileSet {
    pub long_form: RenderOutcome,
    pub short_form: RenderOutcome,
    pub voiceover: RenderOutcome,
}

impl VideoFileSet {
    pub fn long_form_path(&self) -> Option<&Path> {
        self.long_form.path()
    }

    pub fn short_form_path(&self) -> Option<&Path> {
        self.short_form.path()
    }

    pub fn voiceover_path(&self) -> Option<&Path> {
        self.voiceover.path()
    }

    /// Names of artifacts that were skipped.
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for (name, outcome) in [
            ("voiceover", &self.voiceover),
            ("long_form", &self.long_form),
            ("short_form", &self.short_form),
        ] {
            if !outcome.is_rendered() {
                missing.push(name.to_string());
            }
        }
        missing
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum RunOutcome {
    /// Every artifact rendered and every configured platform returned a URL.
    Complete,
    /// The run finished but some artifacts or uploads are missing.
    Partial { missing: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_skipped_artifacts() {
        let set = VideoFileSet {
            long_form: RenderOutcome::rendered("/out/long.mp4"),
            short_form: RenderOutcome::skipped("ffmpeg exited 1"),
            voiceover: RenderOutcome::rendered("/tmp/vo.mp3"),
        };
        assert_eq!(set.missing(), vec!["short_form".to_string()]);
        assert_eq!(set.long_form_path(), Some(Path::new("/out/long.mp4")));
        assert!(set.short_form_path().is_none());
    }
}

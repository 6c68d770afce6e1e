//! Generated content: script and SEO metadata.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::fact::FactRecord;

/// A four-section video script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Script {
    pub hook: String,
    pub intro: String,
    pub list_items: String,
    pub conclusion: String,
    /// All four sections joined by single spaces, in order.
    pub full_script: String,
}

impl Script {
    /// Assemble a script from its sections, deriving `full_script`.
    pub fn assemble(
        hook: impl Into<String>,
        intro: impl Into<String>,
        list_items: impl Into<String>,
        conclusion: impl Into<String>,
    ) -> Self {
        let hook = hook.into();
        let intro = intro.into();
        let list_items = list_items.into();
        let conclusion = conclusion.into();
        let full_script = format!("{} {} {} {}", hook, intro, list_items, conclusion);
        Self {
            hook,
            intro,
            list_items,
            conclusion,
            full_script,
        }
    }

    /// Whitespace-separated word count of the full script.
    pub fn word_count(&self) -> usize {
        self.full_script.split_whitespace().count()
    }
}

/// SEO metadata attached to an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeoMetadata {
    pub description: String,
    pub tags: Vec<String>,
    pub thumbnail_text: String,
}

/// Everything the video and upload stages need for one run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentBundle {
    pub title: String,
    pub script: Script,
    pub category: Category,
    pub metadata: SeoMetadata,
    /// Source facts, one per list item.
    pub facts: Vec<FactRecord>,
    /// Word count / 150 wpm, in whole seconds.
    pub estimated_duration_secs: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_assembly_order() {
        let script = Script::assemble("h.", "i.", "l.", "c.");
        assert_eq!(script.full_script, "h. i. l. c.");
        assert_eq!(script.word_count(), 4);
    }
}

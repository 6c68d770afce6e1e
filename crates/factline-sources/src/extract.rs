//! Sentence-level fact extraction and flavor statements.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Keywords that mark a sentence as an "interesting fact" candidate.
pub const INTERESTING_KEYWORDS: [&str; 9] = [
    "first",
    "largest",
    "smallest",
    "only",
    "never",
    "most",
    "least",
    "discovered",
    "invented",
];

/// Minimum candidate sentence length (inclusive).
const SENTENCE_MIN: usize = 20;
/// Maximum candidate sentence length (exclusive).
const SENTENCE_MAX: usize = 150;

/// Pick the most interesting sentence from a larger text.
///
/// Sentences are split on `.`. The first sentence containing a keyword
/// within the `[20, 150)` character window wins; failing that, the first
/// sentence in the window; failing that, a truncated prefix of the text.
pub fn extract_interesting_fact(text: &str) -> String {
    let sentences: Vec<&str> = text.split('.').map(str::trim).collect();

    for sentence in &sentences {
        if !in_window(sentence) {
            continue;
        }
        let lowered = sentence.to_lowercase();
        if INTERESTING_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            return sentence.to_string();
        }
    }

    for sentence in &sentences {
        if in_window(sentence) {
            return sentence.to_string();
        }
    }

    truncate_chars(text, SENTENCE_MAX)
}

fn in_window(sentence: &str) -> bool {
    let len = sentence.chars().count();
    (SENTENCE_MIN..SENTENCE_MAX).contains(&len)
}

/// Truncate to at most `max` characters, appending `...` if shortened.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let prefix: String = text.chars().take(max).collect();
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}

/// Extract the first 20th/21st-century year mentioned in a text.
pub fn extract_year(text: &str) -> Option<String> {
    static YEAR_RE: OnceLock<Regex> = OnceLock::new();
    let re = YEAR_RE.get_or_init(|| Regex::new(r"\b(19|20)\d{2}\b").expect("valid year regex"));
    re.find(text).map(|m| m.as_str().to_string())
}

const IMPORTANCE_TEMPLATES: [&str; 4] = [
    "{} revolutionized our understanding of the natural world.",
    "The discovery of {} changed the course of scientific history.",
    "{} remains one of the most important concepts in modern science.",
    "Understanding {} is crucial for advancing human knowledge.",
];

const TECH_IMPACT_TEMPLATES: [&str; 4] = [
    "{} is revolutionizing how we live and work.",
    "The impact of {} on society is profound and far-reaching.",
    "{} represents a major breakthrough in technological advancement.",
    "The development of {} marks a new era in human innovation.",
];

const PSYCHOLOGY_IMPACT_TEMPLATES: [&str; 4] = [
    "Understanding {} helps us improve mental health and well-being.",
    "Research in {} has transformed our understanding of human behavior.",
    "{} provides crucial insights into human development and behavior.",
    "The study of {} continues to enhance our understanding of the mind.",
];

fn fill(rng: &mut StdRng, templates: &[&str], topic: &str) -> String {
    let template = templates.choose(rng).copied().unwrap_or(templates[0]);
    template.replacen("{}", topic, 1)
}

/// Importance statement for a scientific topic.
pub fn importance_statement(rng: &mut StdRng, topic: &str) -> String {
    fill(rng, &IMPORTANCE_TEMPLATES, topic)
}

/// Impact statement for a technology topic.
pub fn tech_impact_statement(rng: &mut StdRng, topic: &str) -> String {
    fill(rng, &TECH_IMPACT_TEMPLATES, topic)
}

/// Significance statement for a psychology topic.
pub fn psychology_impact_statement(rng: &mut StdRng, topic: &str) -> String {
    fill(rng, &PSYCHOLOGY_IMPACT_TEMPLATES, topic)
}

//! Content generation from collected facts.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::info;

use factline_models::{Category, ContentBundle, FactBundle, FactRecord, Script, SeoMetadata};

use crate::templates;

/// Narration speed used for duration estimates.
const WORDS_PER_MINUTE: f64 = 150.0;

/// Maximum number of list items in a script.
const LIST_ITEM_CAP: usize = 10;

/// Turns fact bundles into titles, scripts and metadata.
///
/// Stateless; all randomness flows through the RNG handed to
/// `create_list_content`, so a fixed seed and fixed facts give an
/// identical script.
#[derive(Debug, Default, Clone)]
pub struct ContentGenerator;

impl ContentGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete content bundle for one run.
    pub fn create_list_content(&self, rng: &mut StdRng, bundle: &FactBundle) -> ContentBundle {
        let category = bundle.category;
        let title = self.generate_title(rng, category);
        let script = self.generate_script(rng, bundle, &title);
        let metadata = self.generate_metadata(&title, category);
        let estimated_duration_secs = estimate_duration(&script);

        info!(
            "Generated content: \"{}\" (~{}s, {} list items)",
            title,
            estimated_duration_secs,
            bundle.facts.len().min(LIST_ITEM_CAP)
        );

        ContentBundle {
            title,
            script,
            category,
            metadata,
            facts: bundle.facts.clone(),
            estimated_duration_secs,
        }
    }

    /// Pick a title from the category's pool and resolve placeholders.
    pub fn generate_title(&self, rng: &mut StdRng, category: Category) -> String {
        let pool = templates::title_pool(category);
        let template = pool.choose(rng).copied().unwrap_or(pool[0]);

        if !template.contains("{}") {
            return template.to_string();
        }

        let fillers = templates::title_fillers(category);
        let filler = fillers
            .choose(rng)
            .copied()
            .unwrap_or_else(|| category.as_str());
        template.replacen("{}", filler, 1)
    }

    fn generate_script(&self, rng: &mut StdRng, bundle: &FactBundle, title: &str) -> Script {
        let hook = templates::HOOKS
            .choose(rng)
            .copied()
            .unwrap_or(templates::HOOKS[0])
            .replacen("{}", bundle.category.as_str(), 1);

        let intro = format!(
            "Welcome back to the channel! Today we're diving into {}. Make sure to subscribe \
             and hit that notification bell because this content is absolutely mind-blowing!",
            title.to_lowercase()
        );

        let list_items = self.generate_list_items(&bundle.facts);

        let conclusion = "Which fact surprised you the most? Let me know in the comments below! \
                          And if you enjoyed this video, smash that like button and subscribe \
                          for more incredible content like this!"
            .to_string();

        Script::assemble(hook, intro, list_items, conclusion)
    }

    /// Narration for the top-10 list. Fewer facts simply produce fewer
    /// items.
    fn generate_list_items(&self, facts: &[FactRecord]) -> String {
        facts
            .iter()
            .take(LIST_ITEM_CAP)
            .enumerate()
            .map(|(i, fact)| format_list_item(i + 1, fact))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn generate_metadata(&self, title: &str, category: Category) -> SeoMetadata {
        SeoMetadata {
            description: format!(
                "Discover amazing facts in this educational video about {}. {} - Subscribe for \
                 more incredible content!",
                category, title
            ),
            tags: templates::tags(category)
                .iter()
                .map(|t| t.to_string())
                .collect(),
            thumbnail_text: format!("TOP 10\n{}\nFACTS", category.as_str().to_uppercase()),
        }
    }
}

/// Narration line for one list item.
pub fn format_list_item(number: usize, fact: &FactRecord) -> String {
    if fact.is_country() {
        let interesting = fact
            .interesting_fact
            .as_deref()
            .unwrap_or("This country has unique features.");
        format!(
            "Number {}: {}. {} With a population of {}, it's truly fascinating.",
            number,
            fact.topic,
            interesting,
            format_number(fact.population.unwrap_or(0))
        )
    } else {
        let summary = fact
            .summary
            .as_deref()
            .unwrap_or("This topic is incredibly important.");
        let mut line = format!("Number {}: {}. {}", number, fact.topic, summary);
        if let Some(flavor) = fact
            .extra
            .get("importance")
            .or_else(|| fact.extra.get("impact"))
            .or_else(|| fact.extra.get("significance"))
        {
            line.push(' ');
            line.push_str(flavor);
        }
        line
    }
}

/// Format large numbers for narration.
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1} million", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1} thousand", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Estimated narration time in whole seconds.
pub fn estimate_duration(script: &Script) -> u32 {
    let word_count = script.word_count() as f64;
    ((word_count / WORDS_PER_MINUTE) * 60.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use factline_models::Provenance;
    use rand::SeedableRng;

    fn sample_bundle() -> FactBundle {
        let mut country = FactRecord::country("Japan");
        country.population = Some(125_700_000);
        country.interesting_fact = Some("Japan consists of over 6,800 islands.".to_string());

        let mut topic = FactRecord::topic("DNA");
        topic.summary = Some("DNA carries genetic instructions.".to_string());
        topic
            .extra
            .insert("importance".to_string(), "DNA changed biology.".to_string());

        FactBundle::new(
            Category::Geography,
            vec![country, topic],
            Provenance::live("test"),
        )
    }

    #[test]
    fn test_script_is_deterministic_for_fixed_seed() {
        let generator = ContentGenerator::new();
        let bundle = sample_bundle();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = generator.create_list_content(&mut rng_a, &bundle);
        let b = generator.create_list_content(&mut rng_b, &bundle);

        assert_eq!(a.title, b.title);
        assert_eq!(a.script.full_script, b.script.full_script);
    }

    #[test]
    fn test_geography_title_from_pool_without_placeholder() {
        let generator = ContentGenerator::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let title = generator.generate_title(&mut rng, Category::Geography);
            assert!(!title.contains("{}"), "unresolved placeholder in {}", title);

            let from_pool = templates::title_pool(Category::Geography).iter().any(
                |template| match template.find("{}") {
                    Some(idx) => {
                        title.starts_with(&template[..idx])
                            && title.ends_with(&template[idx + 2..])
                    }
                    None => title == *template,
                },
            );
            assert!(from_pool, "title not derived from pool: {}", title);
        }
    }

    #[test]
    fn test_duration_monotonic_in_word_count() {
        let short = Script::assemble("a", "b", "word ".repeat(100), "c");
        let long = Script::assemble("a", "b", "word ".repeat(200), "c");
        assert!(estimate_duration(&long) >= estimate_duration(&short));

        // Doubling the whole script doubles the estimate exactly.
        let base = Script::assemble("", "", "word ".repeat(150), "");
        let doubled = Script::assemble("", "", "word ".repeat(300), "");
        assert_eq!(estimate_duration(&base), 60);
        assert_eq!(estimate_duration(&doubled), 120);
    }

    #[test]
    fn test_fewer_facts_produce_fewer_items_without_error() {
        let generator = ContentGenerator::new();
        let mut bundle = sample_bundle();
        bundle.facts.truncate(1);

        let mut rng = StdRng::seed_from_u64(1);
        let content = generator.create_list_content(&mut rng, &bundle);
        assert!(content.script.list_items.starts_with("Number 1:"));
        assert!(!content.script.list_items.contains("Number 2:"));
    }

    #[test]
    fn test_format_number_scales() {
        assert_eq!(format_number(1_439_323_776), "1439.3 million");
        assert_eq!(format_number(125_700_000), "125.7 million");
        assert_eq!(format_number(8_500), "8.5 thousand");
        assert_eq!(format_number(950), "950");
    }

    #[test]
    fn test_country_item_mentions_population() {
        let bundle = sample_bundle();
        let line = format_list_item(1, &bundle.facts[0]);
        assert!(line.contains("125.7 million"));
        assert!(line.contains("Japan"));
    }
}

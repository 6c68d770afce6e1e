//! Hard-coded fallback data used when a live source is unreachable.
//!
//! Every category has a fallback set with at least two records, so the
//! pipeline always has something to narrate.

use factline_models::{Category, FactBundle, FactRecord, Provenance};

/// Fallback bundle for a category.
pub fn bundle_for(category: Category) -> FactBundle {
    let facts = match category {
        Category::Geography => geography_facts(),
        Category::History => history_facts(),
        Category::Science => science_facts(),
        Category::Technology => technology_facts(),
        Category::Psychology => psychology_facts(),
        Category::Space => space_facts(),
        Category::Trending => trending_facts(),
    };
    FactBundle::new(category, facts, Provenance::Fallback)
}

fn country(
    name: &str,
    capital: &str,
    population: u64,
    area: f64,
    interesting_fact: &str,
) -> FactRecord {
    let mut record = FactRecord::country(name);
    record.capital = Some(capital.to_string());
    record.population = Some(population);
    record.area = Some(area);
    record.interesting_fact = Some(interesting_fact.to_string());
    record
}

fn topic(title: &str, summary: &str, interesting_fact: &str) -> FactRecord {
    let mut record = FactRecord::topic(title);
    record.summary = Some(summary.to_string());
    record.interesting_fact = Some(interesting_fact.to_string());
    record
}

fn geography_facts() -> Vec<FactRecord> {
    vec![
        country(
            "United States",
            "Washington, D.C.",
            331_002_651,
            9_833_517.0,
            "The United States is home to all of Earth's five climate types.",
        ),
        country(
            "China",
            "Beijing",
            1_439_323_776,
            9_596_961.0,
            "The Great Wall of China is not visible from space with the naked eye.",
        ),
        country(
            "Brazil",
            "Brasília",
            212_559_417,
            8_515_770.0,
            "Brazil contains about 60% of the Amazon Rainforest.",
        ),
    ]
}

fn history_facts() -> Vec<FactRecord> {
    vec![
        topic(
            "Ancient Egypt",
            "Ancient Egypt was a civilization along the lower Nile that lasted over three thousand years.",
            "The Great Pyramid of Giza was the tallest man-made structure for more than 3,800 years.",
        ),
        topic(
            "Roman Empire",
            "The Roman Empire governed the Mediterranean world for centuries from its capital in Rome.",
            "At its height the Roman Empire contained roughly a fifth of the world's population.",
        ),
    ]
}

fn science_facts() -> Vec<FactRecord> {
    vec![
        topic(
            "DNA",
            "DNA carries the genetic instructions used in the growth and functioning of all known organisms.",
            "If uncoiled, the DNA in a single human cell would stretch about two meters.",
        ),
        topic(
            "Antibiotics",
            "Antibiotics are medicines that fight bacterial infections and have saved millions of lives.",
            "Penicillin, the first true antibiotic, was discovered by accident in 1928.",
        ),
    ]
}

fn technology_facts() -> Vec<FactRecord> {
    let mut ai = topic(
        "Artificial Intelligence",
        "AI is the simulation of human intelligence by machines.",
        "AI systems can now generate human-like text and images.",
    );
    ai.extra.insert(
        "impact".to_string(),
        "AI is transforming industries from healthcare to transportation.".to_string(),
    );

    let mut quantum = topic(
        "Quantum Computing",
        "Quantum computers use quantum mechanics to process information.",
        "Companies are developing quantum computers with increasing numbers of qubits.",
    );
    quantum.extra.insert(
        "impact".to_string(),
        "Quantum computing could revolutionize cryptography and drug discovery.".to_string(),
    );

    vec![ai, quantum]
}

fn psychology_facts() -> Vec<FactRecord> {
    let mut cognitive = topic(
        "Cognitive Psychology",
        "Cognitive psychology studies mental processes including thinking, learning, and memory.",
        "Memory formation and retrieval are complex processes involving multiple brain regions.",
    );
    cognitive.extra.insert(
        "significance".to_string(),
        "Understanding cognitive processes helps improve learning and decision-making.".to_string(),
    );

    let mut social = topic(
        "Social Psychology",
        "Social psychology examines how people's thoughts and behaviors are influenced by others.",
        "Group dynamics and social influence play crucial roles in human behavior.",
    );
    social.extra.insert(
        "significance".to_string(),
        "Social psychology insights help improve communication and relationships.".to_string(),
    );

    vec![cognitive, social]
}

fn space_facts() -> Vec<FactRecord> {
    vec![
        topic(
            "Solar System",
            "Our Solar System consists of eight planets orbiting around the Sun.",
            "If the Sun were as tall as a typical front door, Earth would be the size of a nickel.",
        ),
        topic(
            "Mars",
            "Mars is often called the Red Planet due to its reddish appearance.",
            "Mars has the largest dust storms in our solar system.",
        ),
    ]
}

fn trending_facts() -> Vec<FactRecord> {
    vec![
        topic(
            "Climate Change",
            "Global temperatures continue to rise due to human activities.",
            "The last decade was the warmest on record.",
        ),
        topic(
            "Space Exploration",
            "Private companies are making space travel more accessible.",
            "Reusable rockets have significantly reduced the cost of space launches.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_at_least_two_fallback_records() {
        for category in Category::ALL {
            let bundle = bundle_for(category);
            assert!(
                bundle.facts.len() >= 2,
                "fallback for {} has {} records",
                category,
                bundle.facts.len()
            );
            assert!(bundle.provenance.is_fallback());
        }
    }

    #[test]
    fn test_geography_fallback_records_are_countries() {
        let bundle = bundle_for(Category::Geography);
        assert!(bundle.facts.iter().all(FactRecord::is_country));
    }
}

//! Category-dispatched fact collection.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use tracing::{error, info, warn};

use factline_models::{Category, FactBundle, FactRecord, Provenance};

use crate::apod::ApodClient;
use crate::config::SourcesConfig;
use crate::countries::CountriesClient;
use crate::extract::{
    extract_interesting_fact, extract_year, importance_statement, psychology_impact_statement,
    tech_impact_statement, truncate_chars,
};
use crate::fallback;
use crate::wikipedia::WikipediaClient;

const HISTORICAL_TOPICS: [&str; 10] = [
    "Ancient Egypt",
    "Roman Empire",
    "World War II",
    "Renaissance",
    "Industrial Revolution",
    "Cold War",
    "Ancient Greece",
    "Viking Age",
    "Mongol Empire",
    "American Revolution",
];

const SCIENCE_TOPICS: [&str; 10] = [
    "Quantum physics",
    "DNA",
    "Theory of relativity",
    "Evolution",
    "Photosynthesis",
    "Black holes",
    "Antibiotics",
    "Periodic table",
    "Genetics",
    "Climate change",
];

const SPACE_TOPICS: [&str; 10] = [
    "Black hole",
    "Solar System",
    "Mars exploration",
    "International Space Station",
    "Hubble Space Telescope",
    "Space exploration",
    "Milky Way",
    "Supernova",
    "Exoplanet",
    "Dark matter",
];

const TECH_TOPICS: [&str; 10] = [
    "Artificial Intelligence",
    "Quantum Computing",
    "Blockchain",
    "Internet of Things",
    "5G technology",
    "Cloud computing",
    "Machine Learning",
    "Virtual Reality",
    "Robotics",
    "Cybersecurity",
];

const PSYCH_TOPICS: [&str; 10] = [
    "Cognitive psychology",
    "Behavioral psychology",
    "Social psychology",
    "Developmental psychology",
    "Personality theory",
    "Mental health",
    "Psychological theories",
    "Human behavior",
    "Memory",
    "Emotions",
];

/// Topic label given to the APOD entry in a space bundle.
pub const APOD_TOPIC: &str = "NASA Picture of the Day";

/// Collects fact bundles for each category.
///
/// Collection never fails: a dead source degrades to the category's
/// fallback set with `Provenance::Fallback`.
pub struct DataCollector {
    countries: CountriesClient,
    wikipedia: WikipediaClient,
    apod: ApodClient,
    rng: StdRng,
}

impl DataCollector {
    /// Create a collector with an OS-seeded RNG.
    pub fn new(config: SourcesConfig) -> Self {
        Self::build(config, StdRng::from_os_rng())
    }

    /// Create a collector with a fixed seed (deterministic sampling).
    pub fn with_seed(config: SourcesConfig, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: SourcesConfig, rng: StdRng) -> Self {
        Self {
            countries: CountriesClient::new(&config.countries_base, config.timeout),
            wikipedia: WikipediaClient::new(&config.wikipedia_base, config.timeout),
            apod: ApodClient::new(&config.apod_base, &config.nasa_api_key, config.timeout),
            rng,
        }
    }

    /// Collect a fact bundle for the given category.
    pub async fn collect(&mut self, category: Category) -> FactBundle {
        info!("Collecting facts for category: {}", category);
        let bundle = match category {
            Category::Geography => self.geography().await,
            Category::History => self.history().await,
            Category::Science => self.science().await,
            Category::Technology => self.technology().await,
            Category::Psychology => self.psychology().await,
            Category::Space => self.space().await,
            Category::Trending => self.trending().await,
        };
        if bundle.provenance.is_fallback() {
            warn!(
                "Using fallback data for {} ({} records)",
                category,
                bundle.facts.len()
            );
        }
        bundle
    }

    async fn geography(&mut self) -> FactBundle {
        let countries = match self.countries.all().await {
            Ok(countries) => countries,
            Err(e) => {
                error!("Error collecting geography data: {}", e);
                return fallback::bundle_for(Category::Geography);
            }
        };

        let sample: Vec<_> = countries
            .choose_multiple(&mut self.rng, 15)
            .cloned()
            .collect();

        let mut facts = Vec::new();
        for country in sample {
            let name = country.name.common.clone();
            let mut record = FactRecord::country(&name);
            record.capital = country.first_capital().map(str::to_string);
            record.population = country.population;
            record.area = country.area;
            record.region = country.region.clone();
            record.languages = country.language_names();
            record.currencies = country.currency_codes();
            record.image_url = country.flags.as_ref().and_then(|f| f.png.clone());
            record.interesting_fact = Some(self.country_interesting_fact(&name).await);
            facts.push(record);
        }
        facts.truncate(10);

        FactBundle::new(
            Category::Geography,
            facts,
            Provenance::live("REST Countries API"),
        )
    }

    /// An interesting sentence about a country, from its Wikipedia summary.
    async fn country_interesting_fact(&mut self, name: &str) -> String {
        match self.wikipedia.summary(name).await {
            Ok(summary) => {
                let candidates: Vec<String> = summary
                    .extract
                    .split('.')
                    .map(str::trim)
                    .filter(|s| {
                        let len = s.chars().count();
                        len > 50 && len < 200
                    })
                    .map(str::to_string)
                    .collect();
                candidates
                    .choose(&mut self.rng)
                    .cloned()
                    .unwrap_or_else(|| "This country has a rich history and culture.".to_string())
            }
            Err(_) => format!("{} has unique geographical and cultural features.", name),
        }
    }

    async fn history(&mut self) -> FactBundle {
        let topics = self.sample_topics(&HISTORICAL_TOPICS, 10);
        let mut facts = Vec::new();
        for topic in topics {
            match self.wikipedia.summary(topic).await {
                Ok(summary) => {
                    let mut record = FactRecord::topic(topic);
                    record.summary = Some(truncate_chars(&summary.extract, 300));
                    record.interesting_fact = Some(extract_interesting_fact(&summary.extract));
                    record.url = summary.page_url().map(str::to_string);
                    facts.push(record);
                }
                Err(e) => warn!("Could not fetch data for {}: {}", topic, e),
            }
        }

        if facts.is_empty() {
            return fallback::bundle_for(Category::History);
        }
        FactBundle::new(Category::History, facts, Provenance::live("Wikipedia API"))
    }

    async fn science(&mut self) -> FactBundle {
        let topics = self.sample_topics(&SCIENCE_TOPICS, 10);
        let mut facts = Vec::new();
        for topic in topics {
            match self.wikipedia.summary(topic).await {
                Ok(summary) => {
                    let mut record = FactRecord::topic(topic);
                    record.summary = Some(truncate_chars(&summary.extract, 250));
                    record.extra.insert(
                        "discovery_year".to_string(),
                        extract_year(&summary.extract).unwrap_or_else(|| "Unknown".to_string()),
                    );
                    record.extra.insert(
                        "importance".to_string(),
                        importance_statement(&mut self.rng, topic),
                    );
                    facts.push(record);
                }
                Err(e) => warn!("Could not fetch data for {}: {}", topic, e),
            }
        }

        if facts.is_empty() {
            return fallback::bundle_for(Category::Science);
        }
        FactBundle::new(Category::Science, facts, Provenance::live("Wikipedia API"))
    }

    async fn technology(&mut self) -> FactBundle {
        let topics = self.sample_topics(&TECH_TOPICS, 10);
        let mut facts = Vec::new();
        for topic in topics {
            match self.wikipedia.summary(topic).await {
                Ok(summary) => {
                    let mut record = FactRecord::topic(topic);
                    record.summary = Some(truncate_chars(&summary.extract, 250));
                    record.interesting_fact = Some(extract_interesting_fact(&summary.extract));
                    record.extra.insert(
                        "impact".to_string(),
                        tech_impact_statement(&mut self.rng, topic),
                    );
                    facts.push(record);
                }
                Err(e) => warn!("Could not fetch data for {}: {}", topic, e),
            }
        }

        if facts.is_empty() {
            return fallback::bundle_for(Category::Technology);
        }
        FactBundle::new(Category::Technology, facts, Provenance::live("Wikipedia"))
    }

    async fn psychology(&mut self) -> FactBundle {
        let topics = self.sample_topics(&PSYCH_TOPICS, 10);
        let mut facts = Vec::new();
        for topic in topics {
            match self.wikipedia.summary(topic).await {
                Ok(summary) => {
                    let mut record = FactRecord::topic(topic);
                    record.summary = Some(truncate_chars(&summary.extract, 300));
                    record.interesting_fact = Some(extract_interesting_fact(&summary.extract));
                    record.extra.insert(
                        "significance".to_string(),
                        psychology_impact_statement(&mut self.rng, topic),
                    );
                    facts.push(record);
                }
                Err(e) => warn!("Could not fetch data for {}: {}", topic, e),
            }
        }

        if facts.is_empty() {
            return fallback::bundle_for(Category::Psychology);
        }
        FactBundle::new(Category::Psychology, facts, Provenance::live("Wikipedia"))
    }

    async fn space(&mut self) -> FactBundle {
        let mut facts = Vec::new();

        // A failed APOD call just means no picture-of-the-day entry.
        match self.apod.picture_of_the_day().await {
            Ok(apod) => {
                let mut record = FactRecord::topic(APOD_TOPIC);
                record.summary = Some(apod.explanation);
                record.image_url = Some(apod.url);
                record.extra.insert("title".to_string(), apod.title);
                record.extra.insert("date".to_string(), apod.date);
                facts.push(record);
            }
            Err(e) => warn!("APOD unavailable: {}", e),
        }

        let topics = self.sample_topics(&SPACE_TOPICS, 5);
        for topic in topics {
            match self.wikipedia.summary(topic).await {
                Ok(summary) => {
                    let mut record = FactRecord::topic(topic);
                    record.summary = Some(truncate_chars(&summary.extract, 300));
                    record.interesting_fact = Some(extract_interesting_fact(&summary.extract));
                    record.url = summary.page_url().map(str::to_string);
                    facts.push(record);
                }
                Err(e) => warn!("Could not fetch data for {}: {}", topic, e),
            }
        }

        if facts.is_empty() {
            return fallback::bundle_for(Category::Space);
        }
        FactBundle::new(
            Category::Space,
            facts,
            Provenance::live("NASA API, Wikipedia"),
        )
    }

    async fn trending(&mut self) -> FactBundle {
        const POOL: [Category; 5] = [
            Category::Science,
            Category::History,
            Category::Geography,
            Category::Space,
            Category::Technology,
        ];

        let picks: Vec<Category> = POOL.choose_multiple(&mut self.rng, 3).copied().collect();

        let mut facts = Vec::new();
        let mut any_live = false;
        for category in picks {
            let bundle = match category {
                Category::Science => self.science().await,
                Category::History => self.history().await,
                Category::Geography => self.geography().await,
                Category::Space => self.space().await,
                _ => self.technology().await,
            };
            any_live |= !bundle.provenance.is_fallback();
            facts.extend(bundle.facts.into_iter().take(3));
        }

        if facts.is_empty() {
            return fallback::bundle_for(Category::Trending);
        }

        facts.shuffle(&mut self.rng);
        facts.truncate(10);

        let provenance = if any_live {
            Provenance::live("Mixed Sources")
        } else {
            Provenance::Fallback
        };
        FactBundle::new(Category::Trending, facts, provenance)
    }

    fn sample_topics(&mut self, pool: &[&'static str], count: usize) -> Vec<&'static str> {
        pool.choose_multiple(&mut self.rng, count)
            .copied()
            .collect()
    }
}

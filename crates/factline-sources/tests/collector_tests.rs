//! Integration tests for the data collector against a mock HTTP server.

use std::time::Duration;

use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use factline_models::Category;
use factline_sources::{DataCollector, SourcesConfig};

fn config_for(server: &MockServer) -> SourcesConfig {
    SourcesConfig {
        countries_base: server.uri(),
        wikipedia_base: server.uri(),
        apod_base: server.uri(),
        nasa_api_key: "TEST_KEY".to_string(),
        timeout: Duration::from_secs(2),
    }
}

fn wiki_summary_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Some topic",
        "extract": "This topic was first described in 1905 by researchers. \
                    It remains an active area of study with many open questions.",
        "content_urls": {
            "desktop": { "page": "https://en.wikipedia.org/wiki/Some_topic" }
        }
    })
}

#[tokio::test]
async fn apod_success_puts_picture_of_the_day_first() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "The Horsehead Nebula",
            "explanation": "One of the most identifiable nebulae in the sky.",
            "url": "https://apod.nasa.gov/apod/image/horsehead.jpg",
            "date": "2026-08-06"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/page/summary/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wiki_summary_body()))
        .mount(&server)
        .await;

    let mut collector = DataCollector::with_seed(config_for(&server), 42);
    let bundle = collector.collect(Category::Space).await;

    assert!(!bundle.provenance.is_fallback());
    let first = &bundle.facts[0];
    assert_eq!(first.topic, "NASA Picture of the Day");
    assert!(!first.summary.as_deref().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn apod_failure_drops_entry_without_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/page/summary/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wiki_summary_body()))
        .mount(&server)
        .await;

    let mut collector = DataCollector::with_seed(config_for(&server), 42);
    let bundle = collector.collect(Category::Space).await;

    assert!(!bundle.provenance.is_fallback());
    assert!(bundle
        .facts
        .iter()
        .all(|fact| fact.topic != "NASA Picture of the Day"));
    assert!(!bundle.facts.is_empty());
}

#[tokio::test]
async fn geography_degrades_to_fallback_when_registry_is_down() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut collector = DataCollector::with_seed(config_for(&server), 42);
    let bundle = collector.collect(Category::Geography).await;

    assert!(bundle.provenance.is_fallback());
    assert!(bundle.facts.len() >= 2);
}

#[tokio::test]
async fn every_category_yields_facts_when_network_is_unavailable() {
    let server = MockServer::start().await;

    // Everything the collector touches answers 500.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut collector = DataCollector::with_seed(config_for(&server), 7);
    for category in Category::ALL {
        let bundle = collector.collect(category).await;
        assert!(
            bundle.facts.len() >= 2,
            "category {} produced only {} facts",
            category,
            bundle.facts.len()
        );
    }
}

#[tokio::test]
async fn geography_live_path_maps_country_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "name": { "common": "Japan" },
                "capital": ["Tokyo"],
                "population": 125_700_000u64,
                "area": 377_975.0,
                "region": "Asia",
                "languages": { "jpn": "Japanese" },
                "currencies": { "JPY": { "name": "Japanese yen" } },
                "flags": { "png": "https://flagcdn.com/w320/jp.png" }
            }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/page/summary/.*"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut collector = DataCollector::with_seed(config_for(&server), 1);
    let bundle = collector.collect(Category::Geography).await;

    assert!(!bundle.provenance.is_fallback());
    assert_eq!(bundle.facts.len(), 1);
    let japan = &bundle.facts[0];
    assert_eq!(japan.topic, "Japan");
    assert_eq!(japan.capital.as_deref(), Some("Tokyo"));
    assert_eq!(japan.population, Some(125_700_000));
    // Wikipedia was down, so the per-country default sentence is used.
    assert_eq!(
        japan.interesting_fact.as_deref(),
        Some("Japan has unique geographical and cultural features.")
    );
}

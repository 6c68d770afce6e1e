//! Video assembly: voiceover, long-form and short-form renders.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use uuid::Uuid;

use factline_media::audio::{mux_audio, AudioMixOptions};
use factline_media::cards::TextCard;
use factline_media::{concat_clips, probe_duration, CardRenderer};
use factline_models::{ContentBundle, FactRecord, RenderOutcome, VideoFileSet};
use factline_tts::SpeechClient;

use crate::config::RunnerConfig;
use crate::error::{RunnerError, RunnerResult};

/// Title and outro card length for long-form videos.
const INTRO_OUTRO_SECS: f64 = 5.0;

/// Fallback long-form timeline when no voiceover exists (8 minutes).
const LONG_FALLBACK_SECS: f64 = 480.0;

/// Minimum duration of one long-form fact card.
const MIN_FACT_CARD_SECS: f64 = 2.0;

/// Short-form segment lengths.
const HOOK_CARD_SECS: f64 = 3.0;
const SHORT_FACT_CARD_SECS: f64 = 10.0;
const CTA_CARD_SECS: f64 = 5.0;

/// Hard cap on short-form duration.
const SHORT_MAX_SECS: f64 = 60.0;

/// Fixed call to action closing every short.
const SHORT_CTA: &str = "Follow for more amazing facts!";

/// Renders one run's artifacts.
///
/// Each artifact renders inside its own error boundary: a failure logs
/// and yields `RenderOutcome::Skipped`, and the pipeline continues with
/// whatever rendered.
pub struct VideoCreator {
    speech: Option<SpeechClient>,
    cards: CardRenderer,
    temp_dir: PathBuf,
    output_dir: PathBuf,
    background_music: PathBuf,
}

impl VideoCreator {
    pub fn new(config: &RunnerConfig) -> RunnerResult<Self> {
        let speech = match &config.speech {
            Some(speech_config) => Some(SpeechClient::new(speech_config.clone())?),
            None => None,
        };

        Ok(Self {
            speech,
            cards: CardRenderer::new(Some(config.font_file.clone())),
            temp_dir: config.temp_dir.clone(),
            output_dir: config.output_dir.clone(),
            background_music: config.background_music.clone(),
        })
    }

    /// Render the voiceover and both video formats.
    pub async fn create_videos(&self, content: &ContentBundle) -> VideoFileSet {
        let voiceover = self
            .synthesize(&content.script.full_script, "voiceover")
            .await;

        let long_form = match self.create_long_form(content, voiceover.path()).await {
            Ok(path) => RenderOutcome::rendered(path),
            Err(e) => {
                error!("Error creating long-form video: {}", e);
                RenderOutcome::skipped(e.to_string())
            }
        };

        let short_form = match self.create_short_form(content).await {
            Ok(path) => RenderOutcome::rendered(path),
            Err(e) => {
                error!("Error creating short-form video: {}", e);
                RenderOutcome::skipped(e.to_string())
            }
        };

        VideoFileSet {
            long_form,
            short_form,
            voiceover,
        }
    }

    /// Synthesize narration into the temp dir. Missing TTS
    /// configuration or a failed call yields `Skipped`.
    async fn synthesize(&self, text: &str, prefix: &str) -> RenderOutcome {
        let client = match &self.speech {
            Some(client) => client,
            None => {
                warn!("Speech synthesis not configured; rendering without narration");
                return RenderOutcome::skipped("speech synthesis not configured");
            }
        };

        let path = self
            .temp_dir
            .join(format!("{}_{}.mp3", prefix, Uuid::new_v4()));
        match client.synthesize_to_file(text, &path).await {
            Ok(()) => RenderOutcome::rendered(path),
            Err(e) => {
                error!("Error creating voiceover: {}", e);
                RenderOutcome::skipped(e.to_string())
            }
        }
    }

    /// Long-form: title card + one card per fact + outro, with the full
    /// voiceover and low background music.
    async fn create_long_form(
        &self,
        content: &ContentBundle,
        voiceover: Option<&Path>,
    ) -> RunnerResult<PathBuf> {
        let total_secs = match voiceover {
            Some(path) => probe_duration(path).await?,
            None => LONG_FALLBACK_SECS,
        };

        let facts: Vec<&FactRecord> = content.facts.iter().take(10).collect();
        if facts.is_empty() {
            return Err(RunnerError::render_failed("no facts to render"));
        }
        let fact_secs = ((total_secs - 2.0 * INTRO_OUTRO_SECS) / facts.len() as f64)
            .max(MIN_FACT_CARD_SECS);

        let mut clips = Vec::new();
        clips.push(
            self.render_card(&TextCard::title(&content.title, INTRO_OUTRO_SECS), "title")
                .await?,
        );
        for (i, fact) in facts.iter().enumerate() {
            let heading = format!("#{} {}", i + 1, fact.topic);
            let card = TextCard::fact(i, &heading, &display_body(fact), fact_secs);
            clips.push(self.render_card(&card, &format!("fact_{}", i + 1)).await?);
        }
        clips.push(
            self.render_card(&TextCard::outro(INTRO_OUTRO_SECS), "outro")
                .await?,
        );

        let silent = self
            .temp_dir
            .join(format!("long_silent_{}.mp4", Uuid::new_v4()));
        concat_clips(&clips, &self.temp_dir, &silent).await?;

        let output = self.output_dir.join(format!(
            "long_form_{}_{}.mp4",
            content.category,
            Uuid::new_v4()
        ));
        let options = AudioMixOptions {
            music: Some(self.background_music.clone()),
            ..Default::default()
        };
        mux_audio(&silent, voiceover, &options, &output).await?;

        info!("Long-form video rendered: {}", output.display());
        Ok(output)
    }

    /// Short-form: hook card + top three facts + CTA, vertical, with an
    /// independent condensed voiceover, capped at 60 seconds.
    async fn create_short_form(&self, content: &ContentBundle) -> RunnerResult<PathBuf> {
        let condensed = condense_script_for_shorts(content);
        let voiceover = self.synthesize(&condensed, "short_audio").await;

        let mut clips = Vec::new();
        clips.push(
            self.render_card(
                &TextCard::vertical_text(&content.script.hook, HOOK_CARD_SECS),
                "short_hook",
            )
            .await?,
        );
        for (i, fact) in content.facts.iter().take(3).enumerate() {
            let card = TextCard::vertical_fact(i + 1, &display_body(fact), SHORT_FACT_CARD_SECS);
            clips.push(
                self.render_card(&card, &format!("short_fact_{}", i + 1))
                    .await?,
            );
        }
        clips.push(
            self.render_card(
                &TextCard::vertical_text(SHORT_CTA, CTA_CARD_SECS),
                "short_cta",
            )
            .await?,
        );

        let silent = self
            .temp_dir
            .join(format!("short_silent_{}.mp4", Uuid::new_v4()));
        concat_clips(&clips, &self.temp_dir, &silent).await?;

        let output = self.output_dir.join(format!(
            "short_form_{}_{}.mp4",
            content.category,
            Uuid::new_v4()
        ));
        let options = AudioMixOptions {
            max_duration: Some(SHORT_MAX_SECS),
            ..Default::default()
        };
        mux_audio(&silent, voiceover.path(), &options, &output).await?;

        info!("Short-form video rendered: {}", output.display());
        Ok(output)
    }

    async fn render_card(&self, card: &TextCard, label: &str) -> RunnerResult<PathBuf> {
        let path = self
            .temp_dir
            .join(format!("card_{}_{}.mp4", label, Uuid::new_v4()));
        self.cards.render(card, &path).await?;
        Ok(path)
    }
}

/// On-screen body text for one fact.
fn display_body(fact: &FactRecord) -> String {
    if fact.is_country() {
        fact.interesting_fact.clone().unwrap_or_default()
    } else {
        truncate_chars(fact.summary.as_deref().unwrap_or_default(), 200)
    }
}

/// Condensed narration for the short: hook, top three facts, CTA.
pub fn condense_script_for_shorts(content: &ContentBundle) -> String {
    let mut parts = vec![content.script.hook.clone()];

    for (i, fact) in content.facts.iter().take(3).enumerate() {
        let number = i + 1;
        let line = if fact.is_country() {
            format!(
                "Number {}: {}. {}",
                number,
                fact.topic,
                fact.interesting_fact.as_deref().unwrap_or_default()
            )
        } else {
            format!(
                "Number {}: {}. {}",
                number,
                fact.topic,
                truncate_chars(fact.summary.as_deref().unwrap_or_default(), 100)
            )
        };
        parts.push(line);
    }

    parts.push(SHORT_CTA.to_string());
    parts.join(" ")
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let prefix: String = text.chars().take(max).collect();
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factline_models::{Category, FactBundle, Provenance, Script, SeoMetadata};

    fn content_with_facts(facts: Vec<FactRecord>) -> ContentBundle {
        let bundle = FactBundle::new(Category::Space, facts, Provenance::live("test"));
        ContentBundle {
            title: "10 Space Facts".to_string(),
            script: Script::assemble("Hook line...", "Intro.", "Items.", "Outro."),
            category: bundle.category,
            metadata: SeoMetadata {
                description: "desc".to_string(),
                tags: vec![],
                thumbnail_text: "TOP 10\nSPACE\nFACTS".to_string(),
            },
            facts: bundle.facts,
            estimated_duration_secs: 100,
        }
    }

    #[test]
    fn test_condensed_script_shape() {
        let mut country = FactRecord::country("Japan");
        country.population = Some(1);
        country.interesting_fact = Some("Islands everywhere.".to_string());

        let mut topic = FactRecord::topic("Mars");
        topic.summary = Some("The red planet.".to_string());

        let mut extra = FactRecord::topic("Moon");
        extra.summary = Some("Our satellite.".to_string());

        let mut fourth = FactRecord::topic("Sun");
        fourth.summary = Some("Should not appear.".to_string());

        let content = content_with_facts(vec![country, topic, extra, fourth]);
        let script = condense_script_for_shorts(&content);

        assert!(script.starts_with("Hook line..."));
        assert!(script.contains("Number 1: Japan. Islands everywhere."));
        assert!(script.contains("Number 2: Mars. The red planet."));
        assert!(script.contains("Number 3: Moon."));
        assert!(!script.contains("Sun"));
        assert!(script.ends_with(SHORT_CTA));
    }

    #[test]
    fn test_display_body_truncates_topic_summaries() {
        let mut fact = FactRecord::topic("Mars");
        fact.summary = Some("x".repeat(300));
        let body = display_body(&fact);
        assert_eq!(body.chars().count(), 203);
        assert!(body.ends_with("..."));
    }
}

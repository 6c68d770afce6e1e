//! The daily content pipeline.

use chrono::{DateTime, Datelike, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use factline_content::ContentGenerator;
use factline_models::{RunOutcome, VideoRecord};
use factline_sources::DataCollector;
use factline_store::VideoRepository;
use factline_upload::PlatformUploader;

use crate::calendar::category_for;
use crate::error::RunnerResult;
use crate::render::VideoCreator;

/// One-pass pipeline: collect → generate → render → upload → persist.
pub struct Pipeline {
    collector: DataCollector,
    generator: ContentGenerator,
    creator: VideoCreator,
    uploader: PlatformUploader,
    videos: VideoRepository,
    /// Fixed seed for template selection; unset derives one per day.
    content_seed: Option<u64>,
}

impl Pipeline {
    pub fn new(
        collector: DataCollector,
        creator: VideoCreator,
        uploader: PlatformUploader,
        videos: VideoRepository,
        content_seed: Option<u64>,
    ) -> Self {
        Self {
            collector,
            generator: ContentGenerator::new(),
            creator,
            uploader,
            videos,
            content_seed,
        }
    }

    /// Generate, render, upload and persist one day's content.
    ///
    /// Collection and rendering degrade internally; upload failures
    /// leave URLs absent. Persistence errors (including a duplicate
    /// title) propagate and abort the run with no record.
    pub async fn run_daily(&mut self, now: DateTime<Local>) -> RunnerResult<RunOutcome> {
        let category = category_for(now.weekday());
        info!(
            "Generating content for {:?} - Category: {}",
            now.weekday(),
            category
        );

        let raw = self.collector.collect(category).await;

        let seed = self.content_seed.unwrap_or_else(|| seed_for_date(&now));
        let mut rng = StdRng::seed_from_u64(seed);
        let content = self.generator.create_list_content(&mut rng, &raw);

        let files = self.creator.create_videos(&content).await;

        let uploads = self.uploader.upload_to_platforms(&files, &content).await;

        let record = VideoRecord::from_run(&content.title, category, &uploads);
        self.videos.create(&record).await?;

        let mut missing = files.missing();
        missing.extend(uploads.missing());
        let outcome = if missing.is_empty() {
            RunOutcome::Complete
        } else {
            RunOutcome::Partial { missing }
        };

        info!("Daily content generation completed: {:?}", outcome);
        Ok(outcome)
    }
}

/// Per-day seed so reruns of the same date pick the same templates.
fn seed_for_date(now: &DateTime<Local>) -> u64 {
    let date = now.date_naive();
    date.num_days_from_ce() as u64
}

//! Daily scheduling loop.

use chrono::{Datelike, Local, NaiveDate, Timelike};
use tracing::{error, info};

use crate::pipeline::Pipeline;

/// Hour of day (local) when the daily run becomes due.
const DAILY_TRIGGER_HOUR: u32 = 9;

/// Poll interval between trigger checks.
const POLL_INTERVAL_SECS: u64 = 3600;

/// Hourly-polling scheduler for the daily and weekly triggers.
///
/// One task both polls and executes, so triggers cannot overlap a
/// running job. A failed run logs and waits for the next day.
pub struct Scheduler {
    pipeline: Pipeline,
    last_run_date: Option<NaiveDate>,
    last_analysis_week: Option<(i32, u32)>,
}

impl Scheduler {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            last_run_date: None,
            last_analysis_week: None,
        }
    }

    /// Run one day's content generation immediately.
    pub async fn run_once(&mut self) {
        let now = Local::now();
        match self.pipeline.run_daily(now).await {
            Ok(outcome) => info!("Run finished: {:?}", outcome),
            Err(e) => error!("Error in daily content generation: {}", e),
        }
    }

    /// Poll hourly and fire due triggers, forever.
    pub async fn run_forever(&mut self) {
        info!(
            "Automation started; daily content generation due at {:02}:00",
            DAILY_TRIGGER_HOUR
        );
        loop {
            self.tick(Local::now()).await;
            tokio::time::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
        }
    }

    /// Check and fire due triggers for one poll.
    async fn tick(&mut self, now: chrono::DateTime<Local>) {
        let today = now.date_naive();
        if now.hour() >= DAILY_TRIGGER_HOUR && self.last_run_date != Some(today) {
            self.last_run_date = Some(today);
            match self.pipeline.run_daily(now).await {
                Ok(outcome) => info!("Run finished: {:?}", outcome),
                Err(e) => error!("Error in daily content generation: {}", e),
            }
        }

        let week = now.iso_week();
        let week_key = (week.year(), week.week());
        if self.last_analysis_week != Some(week_key) {
            self.last_analysis_week = Some(week_key);
            self.analyze_performance();
        }
    }

    /// Weekly performance analysis.
    ///
    /// TODO: read back view counts through the platform APIs and feed
    /// them into `TopicUsageRepository`; for now this only logs.
    fn analyze_performance(&self) {
        info!("Running weekly performance analysis...");
    }
}

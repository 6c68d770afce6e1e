//! Daily content pipeline binary.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use factline_runner::{Pipeline, RunMode, RunnerConfig, Scheduler, VideoCreator};
use factline_sources::DataCollector;
use factline_store::{StoreClient, VideoRepository};
use factline_upload::{InstagramClient, PlatformUploader, YouTubeClient};

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("factline=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting factline-runner");

    let config = match RunnerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.ensure_directories() {
        error!("Failed to create working directories: {}", e);
        std::process::exit(1);
    }

    let store = match StoreClient::new(config.store.clone()).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create store client: {}", e);
            std::process::exit(1);
        }
    };

    let creator = match VideoCreator::new(&config) {
        Ok(creator) => creator,
        Err(e) => {
            error!("Failed to create video creator: {}", e);
            std::process::exit(1);
        }
    };

    let youtube = match config.youtube.clone().map(YouTubeClient::new).transpose() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create YouTube client: {}", e);
            std::process::exit(1);
        }
    };
    let instagram = match config.instagram.clone().map(InstagramClient::new).transpose() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Instagram client: {}", e);
            std::process::exit(1);
        }
    };

    let pipeline = Pipeline::new(
        DataCollector::new(config.sources.clone()),
        creator,
        PlatformUploader::new(youtube, instagram),
        VideoRepository::new(store),
        config.content_seed,
    );

    let mut scheduler = Scheduler::new(pipeline);
    match config.run_mode {
        RunMode::Once => scheduler.run_once().await,
        RunMode::Scheduled => scheduler.run_forever().await,
    }

    info!("Runner finished");
}

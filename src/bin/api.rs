//! Moodlog API Server
//!
//! Run with: cargo run --bin moodlog-api
//!
//! # Configuration
//!
//! Loaded from `~/.config/moodlog/config.toml` or `./config.toml`,
//! with environment variable overrides:
//! - `MOODLOG_DATA_FILE`: Path to the CSV mood log
//! - `MOODLOG_HOST`: Host to bind to (default: 127.0.0.1)
//! - `MOODLOG_PORT`: Port to listen on (default: 8086)
//! - `MOODLOG_LOG_LEVEL`: Log level (default: info)
//! - `MOODLOG_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use moodlog::api::{serve, AppState};
use moodlog::config::Config;
use moodlog::storage::{MoodStore, StoreConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config);

    tracing::info!("Starting Moodlog API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data file: {}", config.storage.data_file);

    let store = Arc::new(MoodStore::open(StoreConfig::new(&config.storage.data_file))?);
    tracing::info!("Mood store opened with {} entries", store.len().await);

    let api_config = config.api.clone();
    let state = AppState::new(store, config);

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Moodlog API server stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "moodlog={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

//! # Moodlog
//!
//! Personal mood journal - daily mood ratings (1-5) with short journal
//! entries, stored in a flat CSV file, analyzed for trends, weekly and
//! monthly patterns, factor correlations, streaks, and volatility.
//!
//! ## Modules
//!
//! - [`storage`]: CSV-backed mood entry store (one entry per date)
//! - [`analytics`]: Pure-function analytics over a series snapshot
//! - [`report`]: JSON report and plain-text summary generation
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moodlog::storage::{MoodEntry, MoodStore, StoreConfig};
//! use moodlog::analytics::summarize;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MoodStore::open(StoreConfig::default())?;
//!
//!     let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!     store
//!         .upsert(MoodEntry::new(today, 4).journal("Long walk, clear head"))
//!         .await?;
//!
//!     let series = store.load().await;
//!     let summary = summarize(&series);
//!     println!("{}", serde_json::to_string_pretty(&summary)?);
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod report;
pub mod storage;

// Re-export top-level types for convenience
pub use storage::{
    MoodEntry, MoodSeries, MoodStats, MoodStore, StorageError, StorageResult, StoreConfig,
    MOOD_MAX, MOOD_MIN,
};

pub use analytics::{summarize, AnalyticsSummary};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError};

pub use report::{build_report, render_text_summary, AnalyticsReport};

//! Moodlog demo
//!
//! Seeds a throwaway mood log with sample data and prints what the
//! analytics engine makes of it.

use chrono::{Duration, Utc};
use moodlog::analytics;
use moodlog::storage::{MoodEntry, MoodStore, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "moodlog=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Moodlog v{}", env!("CARGO_PKG_VERSION"));

    let dir = demo_dir()?;
    let store = MoodStore::open(StoreConfig::new(dir.join("mood_log.csv")))?;

    demo_write(&store).await?;
    demo_analyze(&store).await;

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

fn demo_dir() -> std::io::Result<std::path::PathBuf> {
    let dir = std::env::temp_dir().join(format!("moodlog-demo-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

async fn demo_write(store: &MoodStore) -> anyhow::Result<()> {
    tracing::info!("Writing demo entries...");

    let today = Utc::now().date_naive();
    let notes = [
        "Slow start but a good afternoon",
        "Long walk after work",
        "Deadline stress",
        "Dinner with friends",
        "Quiet day, read a lot",
        "",
        "Gym in the morning, felt sharp all day",
    ];

    // Three weeks of entries with a mild upward drift and one gap
    for i in 0..21i64 {
        if i == 10 {
            continue; // skipped day, breaks the streak
        }
        let date = today - Duration::days(20 - i);
        let base = 2 + (i / 7) as u8; // drifts 2 -> 4 across the weeks
        let wobble = (i % 3) as u8;
        let mood = (base + wobble).clamp(1, 5);
        let journal = notes[(i % notes.len() as i64) as usize];

        store
            .upsert(MoodEntry::new(date, mood).journal(journal))
            .await?;
    }

    tracing::info!("Wrote {} entries", store.len().await);
    Ok(())
}

async fn demo_analyze(store: &MoodStore) {
    let series = store.load().await;

    if let Some(stats) = series.stats() {
        tracing::info!(
            "Stats: {} entries, avg {:.2}, median {:.1}",
            stats.total_entries,
            stats.average_mood,
            stats.median_mood
        );
    }

    if let Some(trend) = analytics::analyze_trend(&series) {
        tracing::info!(
            "Trend: {} ({:.2} recent vs {:.2} previous)",
            trend.direction,
            trend.recent_average,
            trend.previous_average
        );
    }

    let weekly = analytics::analyze_weekly(&series);
    if let (Some(best), Some(worst)) = (&weekly.best_day, &weekly.worst_day) {
        tracing::info!("Weekly: best {}, worst {}", best, worst);
    }

    for factor in &analytics::analyze_correlations(&series).factors {
        tracing::info!(
            "Correlation {}: {:.3} ({}, {})",
            factor.factor,
            factor.coefficient,
            factor.strength,
            factor.direction
        );
    }

    if let Some(streaks) = analytics::analyze_streaks(&series) {
        tracing::info!(
            "Streaks: longest {} days, consistency {:.0}%",
            streaks.longest_streak,
            streaks.consistency_score * 100.0
        );
    }

    if let Some(vol) = analytics::analyze_volatility(&series) {
        tracing::info!(
            "Volatility: std dev {:.2} ({}), stability {:.2}",
            vol.standard_deviation,
            vol.category,
            vol.stability_score
        );
    }
}

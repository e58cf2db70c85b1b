//! Volatility and stability scoring
//!
//! Measures how much the mood rating swings: sample standard deviation,
//! range, and the mean absolute change between temporally adjacent entries.
//! Adjacency is by log order, not calendar days: across a gap the "daily
//! change" is still the difference between the two nearest logged entries.

use serde::Serialize;

use crate::analytics::stats::{mean, sample_std_dev};
use crate::storage::MoodSeries;

/// Maximum possible spread on the 1-5 mood scale, used to normalize.
const MOOD_SCALE_RANGE: f64 = 4.0;

/// Volatility category by standard deviation
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum VolatilityCategory {
    #[serde(rename = "Very Stable")]
    VeryStable,
    Stable,
    Moderate,
    Variable,
    #[serde(rename = "Highly Variable")]
    HighlyVariable,
}

impl std::fmt::Display for VolatilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolatilityCategory::VeryStable => write!(f, "Very Stable"),
            VolatilityCategory::Stable => write!(f, "Stable"),
            VolatilityCategory::Moderate => write!(f, "Moderate"),
            VolatilityCategory::Variable => write!(f, "Variable"),
            VolatilityCategory::HighlyVariable => write!(f, "Highly Variable"),
        }
    }
}

/// Result of volatility analysis
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VolatilityResult {
    /// Sample standard deviation of mood values
    pub standard_deviation: f64,
    /// Max minus min mood value
    pub mood_range: f64,
    /// Mean absolute difference between adjacent logged entries
    pub average_daily_change: f64,
    /// 1 minus (std dev / 4). Theoretically unbounded below, but std dev
    /// cannot exceed 4 on a 1-5 scale; not clamped.
    pub stability_score: f64,
    /// Category derived from the standard deviation
    pub category: VolatilityCategory,
}

/// Score mood volatility
///
/// Returns None for series with fewer than 2 entries.
pub fn analyze_volatility(series: &MoodSeries) -> Option<VolatilityResult> {
    let moods = series.moods();
    if moods.len() < 2 {
        return None;
    }

    let standard_deviation = sample_std_dev(&moods)?;
    let max = moods.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = moods.iter().cloned().fold(f64::INFINITY, f64::min);

    let changes: Vec<f64> = moods.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    let average_daily_change = mean(&changes)?;

    Some(VolatilityResult {
        standard_deviation,
        mood_range: max - min,
        average_daily_change,
        stability_score: 1.0 - standard_deviation / MOOD_SCALE_RANGE,
        category: categorize(standard_deviation),
    })
}

fn categorize(std_dev: f64) -> VolatilityCategory {
    if std_dev < 0.5 {
        VolatilityCategory::VeryStable
    } else if std_dev < 1.0 {
        VolatilityCategory::Stable
    } else if std_dev < 1.5 {
        VolatilityCategory::Moderate
    } else if std_dev < 2.0 {
        VolatilityCategory::Variable
    } else {
        VolatilityCategory::HighlyVariable
    }
}

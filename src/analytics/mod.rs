//! Mood analytics engine
//!
//! Statistical computations over a time-ordered mood series: trend
//! detection, weekly/monthly aggregation, correlation analysis, streak
//! detection, and volatility scoring.
//!
//! Every operation is a pure function of the [`MoodSeries`] it receives.
//! The engine holds no state across calls; insufficient data yields an
//! absent or empty result rather than an error, and callers are expected
//! to check data-sufficiency thresholds (7 entries for trend, 2 for
//! volatility and correlation) before reading numbers off the results.

pub mod correlation;
pub mod monthly;
pub mod stats;
pub mod streak;
pub mod trend;
pub mod volatility;
pub mod weekly;

pub use correlation::{analyze_correlations, CorrelationResult, Factor, FactorCorrelation};
pub use monthly::{analyze_monthly, MonthBucket, MonthlyStats};
pub use streak::{analyze_streaks, StreakResult};
pub use trend::{
    analyze_trend, rolling_average, RollingPoint, TrendDirection, TrendResult, ROLLING_LONG,
    ROLLING_SHORT, TREND_THRESHOLD, TREND_WINDOW,
};
pub use volatility::{analyze_volatility, VolatilityCategory, VolatilityResult};
pub use weekly::{analyze_weekly, WeekdayBucket, WeekdayStats};

use crate::storage::{MoodSeries, MoodStats};
use serde::Serialize;

/// Every analytic over one series, bundled for reports and the summary
/// endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    /// Basic statistics; None for an empty series
    pub stats: Option<MoodStats>,
    /// Trend classification; None below 7 entries
    pub trend: Option<TrendResult>,
    pub weekly: WeekdayStats,
    pub monthly: MonthlyStats,
    pub correlations: CorrelationResult,
    /// Streaks; None for an empty series
    pub streaks: Option<StreakResult>,
    /// Volatility; None below 2 entries
    pub volatility: Option<VolatilityResult>,
}

/// Run every analysis over one snapshot
pub fn summarize(series: &MoodSeries) -> AnalyticsSummary {
    AnalyticsSummary {
        stats: series.stats(),
        trend: analyze_trend(series),
        weekly: analyze_weekly(series),
        monthly: analyze_monthly(series),
        correlations: analyze_correlations(series),
        streaks: analyze_streaks(series),
        volatility: analyze_volatility(series),
    }
}

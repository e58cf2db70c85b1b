//! Trend analysis
//!
//! Compares the mean of the 7 most recent entries against the 7 before them
//! and classifies the direction. Also produces rolling averages (windows 7
//! and 30) as a side output for charting; those carry no decision logic.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::stats::mean;
use crate::storage::MoodSeries;

/// Window of recent entries used for trend classification.
pub const TREND_WINDOW: usize = 7;
/// Short rolling-average window for charts.
pub const ROLLING_SHORT: usize = 7;
/// Long rolling-average window for charts.
pub const ROLLING_LONG: usize = 30;
/// Minimum recent-vs-previous gap before a trend counts as a change.
pub const TREND_THRESHOLD: f64 = 0.2;

/// Direction of the recent mood trend
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Improving => write!(f, "improving"),
            TrendDirection::Declining => write!(f, "declining"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Result of trend analysis
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendResult {
    /// Classified direction
    pub direction: TrendDirection,
    /// Mean mood of the 7 most recent entries
    pub recent_average: f64,
    /// Mean mood of the 7 entries before those; equals `recent_average`
    /// when the series has fewer than 14 entries
    pub previous_average: f64,
}

/// Classify the recent mood trend
///
/// Returns None for series with fewer than 7 entries: not enough data for a
/// meaningful answer, so no answer rather than a default one.
pub fn analyze_trend(series: &MoodSeries) -> Option<TrendResult> {
    let moods = series.moods();
    if moods.len() < TREND_WINDOW {
        return None;
    }

    let recent_average = mean(&moods[moods.len() - TREND_WINDOW..])?;

    // Entries ranked 8-14 most recent; fall back to the recent mean when
    // the series is shorter than two full windows
    let previous_average = if moods.len() >= 2 * TREND_WINDOW {
        mean(&moods[moods.len() - 2 * TREND_WINDOW..moods.len() - TREND_WINDOW])?
    } else {
        recent_average
    };

    let direction = if recent_average > previous_average + TREND_THRESHOLD {
        TrendDirection::Improving
    } else if recent_average < previous_average - TREND_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    Some(TrendResult {
        direction,
        recent_average,
        previous_average,
    })
}

/// One rolling-average point for charting
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RollingPoint {
    pub date: NaiveDate,
    pub average: f64,
}

/// Trailing rolling average over the series
///
/// Minimum period 1: at the start of the series the window covers however
/// many entries exist so far, so the output has one point per entry.
pub fn rolling_average(series: &MoodSeries, window: usize) -> Vec<RollingPoint> {
    let entries = series.entries();
    let window = window.max(1);

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let start = (i + 1).saturating_sub(window);
            let slice: Vec<f64> = entries[start..=i].iter().map(|e| f64::from(e.mood)).collect();
            RollingPoint {
                date: entry.date,
                // Window is never empty here
                average: slice.iter().sum::<f64>() / slice.len() as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MoodEntry;
    use chrono::Duration;

    fn series_of(moods: &[u8]) -> MoodSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        MoodSeries::from_entries(
            moods
                .iter()
                .enumerate()
                .map(|(i, &m)| MoodEntry::new(start + Duration::days(i as i64), m))
                .collect(),
        )
    }

    #[test]
    fn test_insufficient_data_reports_none() {
        for n in 0..7 {
            let series = series_of(&vec![3; n]);
            assert!(analyze_trend(&series).is_none(), "n={}", n);
        }
    }

    #[test]
    fn test_improving_trend() {
        // 7 low entries followed by 7 high ones
        let series = series_of(&[2, 2, 2, 2, 2, 2, 2, 4, 4, 4, 4, 4, 4, 4]);
        let result = analyze_trend(&series).unwrap();
        assert_eq!(result.direction, TrendDirection::Improving);
        assert!((result.recent_average - 4.0).abs() < 1e-9);
        assert!((result.previous_average - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_declining_trend() {
        let series = series_of(&[5, 5, 5, 5, 5, 5, 5, 2, 2, 2, 2, 2, 2, 2]);
        let result = analyze_trend(&series).unwrap();
        assert_eq!(result.direction, TrendDirection::Declining);
    }

    #[test]
    fn test_stable_within_threshold() {
        // Recent mean 3.0 vs previous 3.0: inside the 0.2 band
        let series = series_of(&[3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3]);
        let result = analyze_trend(&series).unwrap();
        assert_eq!(result.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_short_series_falls_back_to_recent() {
        // 7-13 entries: previous average mirrors the recent one, so stable
        let series = series_of(&[1, 1, 1, 5, 5, 5, 5, 5, 5, 5]);
        let result = analyze_trend(&series).unwrap();
        assert_eq!(result.recent_average, result.previous_average);
        assert_eq!(result.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_rolling_average_min_period_one() {
        let series = series_of(&[1, 3, 5]);
        let points = rolling_average(&series, 7);
        assert_eq!(points.len(), 3);
        assert!((points[0].average - 1.0).abs() < 1e-9);
        assert!((points[1].average - 2.0).abs() < 1e-9);
        assert!((points[2].average - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rolling_average_window_slides() {
        let series = series_of(&[1, 1, 1, 5, 5, 5]);
        let points = rolling_average(&series, 3);
        // Last window covers the three 5s
        assert!((points[5].average - 5.0).abs() < 1e-9);
        // Middle window mixes
        assert!((points[3].average - (1.0 + 1.0 + 5.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rolling_average_empty() {
        assert!(rolling_average(&MoodSeries::default(), 7).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let series = series_of(&[2, 3, 4, 5, 4, 3, 2, 3, 4, 5, 4, 3, 2, 3]);
        assert_eq!(analyze_trend(&series), analyze_trend(&series));
        assert_eq!(
            rolling_average(&series, 7),
            rolling_average(&series, 7)
        );
    }
}

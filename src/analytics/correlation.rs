//! Correlation analysis
//!
//! Pearson correlation of the mood rating against factors derived from each
//! entry's date and journal. Factors whose correlation is undefined (zero
//! variance, or fewer than 2 entries) are left out of the result entirely,
//! so callers must not assume all four keys are present.

use chrono::Datelike;
use serde::Serialize;

use crate::analytics::stats::pearson_correlation;
use crate::storage::{MoodEntry, MoodSeries};

/// Derived factors correlated against mood, in canonical order.
pub const FACTORS: [Factor; 4] = [
    Factor::DayOfWeek,
    Factor::DayOfMonth,
    Factor::Month,
    Factor::JournalLength,
];

/// A numeric factor derived from a mood entry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// Day-of-week index, Monday = 0
    DayOfWeek,
    /// Day of the month, 1-31
    DayOfMonth,
    /// Month number, 1-12
    Month,
    /// Journal text length in characters
    JournalLength,
}

impl Factor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::DayOfWeek => "day_of_week",
            Factor::DayOfMonth => "day_of_month",
            Factor::Month => "month",
            Factor::JournalLength => "journal_length",
        }
    }

    fn value(&self, entry: &MoodEntry) -> f64 {
        match self {
            Factor::DayOfWeek => f64::from(entry.date.weekday().num_days_from_monday()),
            Factor::DayOfMonth => f64::from(entry.date.day()),
            Factor::Month => f64::from(entry.date.month()),
            Factor::JournalLength => entry.journal_len() as f64,
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Correlation of one factor with mood
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FactorCorrelation {
    /// Factor name (serialized key)
    pub factor: Factor,
    /// Pearson coefficient, always in [-1, 1]
    pub coefficient: f64,
    /// Human-readable strength: strong, moderate, weak, negligible
    pub strength: &'static str,
    /// "positive" or "negative"
    pub direction: &'static str,
}

/// Result of correlation analysis
///
/// Contains only well-defined coefficients, in canonical factor order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CorrelationResult {
    pub factors: Vec<FactorCorrelation>,
}

impl CorrelationResult {
    /// Coefficient for a factor by name, if defined
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|f| f.factor.as_str() == name)
            .map(|f| f.coefficient)
    }
}

/// Correlate mood against each derived factor over the full series
pub fn analyze_correlations(series: &MoodSeries) -> CorrelationResult {
    let moods = series.moods();
    let mut factors = Vec::new();

    for factor in FACTORS {
        let values: Vec<f64> = series.entries().iter().map(|e| factor.value(e)).collect();

        if let Some(r) = pearson_correlation(&values, &moods) {
            factors.push(FactorCorrelation {
                factor,
                coefficient: r,
                strength: correlation_strength(r),
                direction: if r >= 0.0 { "positive" } else { "negative" },
            });
        }
    }

    CorrelationResult { factors }
}

/// Convert a coefficient to a human-readable strength label
fn correlation_strength(r: f64) -> &'static str {
    let abs_r = r.abs();
    if abs_r > 0.7 {
        "strong"
    } else if abs_r > 0.5 {
        "moderate"
    } else if abs_r > 0.3 {
        "weak"
    } else {
        "negligible"
    }
}

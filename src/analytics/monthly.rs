//! Monthly pattern analysis
//!
//! Groups entries by calendar month name across all years: March 2023 and
//! March 2024 land in the same bucket.

use chrono::Datelike;
use serde::Serialize;

use crate::analytics::stats::round2;
use crate::storage::MoodSeries;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Mean and count for one calendar month
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthBucket {
    /// Month name ("January".."December")
    pub month: String,
    /// Month number, 1-12
    pub month_num: u32,
    /// Mean mood, rounded to 2 decimals
    pub mean: f64,
    /// Number of entries in this month across all years
    pub count: usize,
}

/// Result of monthly pattern analysis, ordered January to December
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MonthlyStats {
    pub months: Vec<MonthBucket>,
    /// Month with the highest mean (ties: earliest month number)
    pub best_month: Option<String>,
    /// Month with the lowest mean (ties: earliest month number)
    pub worst_month: Option<String>,
}

/// Group entries by month name and pick best/worst months
pub fn analyze_monthly(series: &MoodSeries) -> MonthlyStats {
    let mut sums = [0.0f64; 12];
    let mut counts = [0usize; 12];

    for entry in series.entries() {
        let idx = entry.date.month0() as usize;
        sums[idx] += f64::from(entry.mood);
        counts[idx] += 1;
    }

    let mut months = Vec::new();
    let mut best: Option<(f64, &'static str)> = None;
    let mut worst: Option<(f64, &'static str)> = None;

    for (idx, name) in MONTH_NAMES.iter().enumerate() {
        if counts[idx] == 0 {
            continue;
        }

        let mean = round2(sums[idx] / counts[idx] as f64);
        months.push(MonthBucket {
            month: name.to_string(),
            month_num: idx as u32 + 1,
            mean,
            count: counts[idx],
        });

        if best.map_or(true, |(m, _)| mean > m) {
            best = Some((mean, name));
        }
        if worst.map_or(true, |(m, _)| mean < m) {
            worst = Some((mean, name));
        }
    }

    MonthlyStats {
        months,
        best_month: best.map(|(_, n)| n.to_string()),
        worst_month: worst.map(|(_, n)| n.to_string()),
    }
}

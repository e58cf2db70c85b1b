//! Weekly pattern analysis
//!
//! Groups entries by weekday and reports the mean mood and entry count per
//! weekday present, in canonical Monday-first order.

use chrono::{Datelike, Weekday};
use serde::Serialize;

use crate::analytics::stats::round2;
use crate::storage::MoodSeries;

/// Weekdays in canonical ISO order, Monday first.
pub const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Mean and count for one weekday
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekdayBucket {
    /// Weekday name ("Monday".."Sunday")
    pub weekday: String,
    /// Mean mood, rounded to 2 decimals
    pub mean: f64,
    /// Number of entries on this weekday
    pub count: usize,
}

/// Result of weekly pattern analysis
///
/// `days` holds only weekdays with at least one entry, Monday first. An
/// empty series yields an empty result, not an error.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct WeekdayStats {
    pub days: Vec<WeekdayBucket>,
    /// Weekday with the highest mean (ties: first in canonical order)
    pub best_day: Option<String>,
    /// Weekday with the lowest mean (ties: first in canonical order)
    pub worst_day: Option<String>,
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Group entries by weekday and pick best/worst days
pub fn analyze_weekly(series: &MoodSeries) -> WeekdayStats {
    let mut sums = [0.0f64; 7];
    let mut counts = [0usize; 7];

    for entry in series.entries() {
        let idx = entry.date.weekday().num_days_from_monday() as usize;
        sums[idx] += f64::from(entry.mood);
        counts[idx] += 1;
    }

    let mut days = Vec::new();
    let mut best: Option<(f64, &'static str)> = None;
    let mut worst: Option<(f64, &'static str)> = None;

    for day in WEEKDAY_ORDER {
        let idx = day.num_days_from_monday() as usize;
        if counts[idx] == 0 {
            continue;
        }

        let mean = round2(sums[idx] / counts[idx] as f64);
        let name = weekday_name(day);
        days.push(WeekdayBucket {
            weekday: name.to_string(),
            mean,
            count: counts[idx],
        });

        // Strict comparisons keep the earliest weekday on ties
        if best.map_or(true, |(m, _)| mean > m) {
            best = Some((mean, name));
        }
        if worst.map_or(true, |(m, _)| mean < m) {
            worst = Some((mean, name));
        }
    }

    WeekdayStats {
        days,
        best_day: best.map(|(_, n)| n.to_string()),
        worst_day: worst.map(|(_, n)| n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MoodEntry;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_series_empty_result() {
        let stats = analyze_weekly(&MoodSeries::default());
        assert!(stats.days.is_empty());
        assert!(stats.best_day.is_none());
        assert!(stats.worst_day.is_none());
    }

    #[test]
    fn test_three_mondays() {
        // 2024-01-01, -08, -15 are Mondays
        let series = MoodSeries::from_entries(vec![
            MoodEntry::new(date("2024-01-01"), 4),
            MoodEntry::new(date("2024-01-08"), 5),
            MoodEntry::new(date("2024-01-15"), 3),
        ]);

        let stats = analyze_weekly(&series);
        assert_eq!(stats.days.len(), 1);
        assert_eq!(stats.days[0].weekday, "Monday");
        assert_eq!(stats.days[0].mean, 4.0);
        assert_eq!(stats.days[0].count, 3);
        assert_eq!(stats.best_day.as_deref(), Some("Monday"));
        assert_eq!(stats.worst_day.as_deref(), Some("Monday"));
    }

    #[test]
    fn test_canonical_order_and_best_worst() {
        // Wed 2024-01-03 mood 2, Mon 2024-01-01 mood 5, Fri 2024-01-05 mood 3
        let series = MoodSeries::from_entries(vec![
            MoodEntry::new(date("2024-01-03"), 2),
            MoodEntry::new(date("2024-01-01"), 5),
            MoodEntry::new(date("2024-01-05"), 3),
        ]);

        let stats = analyze_weekly(&series);
        let names: Vec<&str> = stats.days.iter().map(|d| d.weekday.as_str()).collect();
        assert_eq!(names, vec!["Monday", "Wednesday", "Friday"]);
        assert_eq!(stats.best_day.as_deref(), Some("Monday"));
        assert_eq!(stats.worst_day.as_deref(), Some("Wednesday"));
    }

    #[test]
    fn test_tie_breaks_to_canonical_order() {
        // Monday and Tuesday both mean 3.0
        let series = MoodSeries::from_entries(vec![
            MoodEntry::new(date("2024-01-01"), 3),
            MoodEntry::new(date("2024-01-02"), 3),
        ]);

        let stats = analyze_weekly(&series);
        assert_eq!(stats.best_day.as_deref(), Some("Monday"));
        assert_eq!(stats.worst_day.as_deref(), Some("Monday"));
    }

    #[test]
    fn test_mean_rounded_two_decimals() {
        // Two Thursdays: (4 + 5) / 2 = 4.5; three Saturdays: 10/3 = 3.33
        let series = MoodSeries::from_entries(vec![
            MoodEntry::new(date("2024-01-04"), 4),
            MoodEntry::new(date("2024-01-11"), 5),
            MoodEntry::new(date("2024-01-06"), 3),
            MoodEntry::new(date("2024-01-13"), 3),
            MoodEntry::new(date("2024-01-20"), 4),
        ]);

        let stats = analyze_weekly(&series);
        let thu = stats.days.iter().find(|d| d.weekday == "Thursday").unwrap();
        let sat = stats.days.iter().find(|d| d.weekday == "Saturday").unwrap();
        assert_eq!(thu.mean, 4.5);
        assert_eq!(sat.mean, 3.33);
    }
}

//! Report generation
//!
//! Builds the analytics report (JSON) and the human-readable text summary
//! from one series snapshot. Both are plain derived documents; nothing here
//! touches storage.

use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::analytics::{summarize, AnalyticsSummary};
use crate::storage::{MoodEntry, MoodSeries};

/// Journal excerpts in the text summary are cut at this many characters.
const EXCERPT_LEN: usize = 150;

/// One raw entry as it appears in the JSON report
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub date: String,
    pub mood: u8,
    pub journal: String,
    pub journal_word_count: usize,
}

impl From<&MoodEntry> for ReportEntry {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            date: entry.date.format("%Y-%m-%d").to_string(),
            mood: entry.mood,
            journal: entry.journal.clone(),
            journal_word_count: entry.journal.split_whitespace().count(),
        }
    }
}

/// Full analytics report over a series
#[derive(Debug, Serialize)]
pub struct AnalyticsReport {
    pub report_info: serde_json::Value,
    #[serde(flatten)]
    pub insights: AnalyticsSummary,
    pub entries: Vec<ReportEntry>,
}

/// Build the JSON analytics report
pub fn build_report(series: &MoodSeries) -> AnalyticsReport {
    let report_info = json!({
        "generated_on": Utc::now().to_rfc3339(),
        "date_range": {
            "start": series.first_date().map(|d| d.format("%Y-%m-%d").to_string()),
            "end": series.last_date().map(|d| d.format("%Y-%m-%d").to_string()),
        },
        "total_entries": series.len(),
    });

    AnalyticsReport {
        report_info,
        insights: summarize(series),
        entries: series.entries().iter().map(ReportEntry::from).collect(),
    }
}

fn excerpt(journal: &str) -> Option<String> {
    if journal.is_empty() {
        return None;
    }
    if journal.chars().count() <= EXCERPT_LEN {
        Some(journal.to_string())
    } else {
        Some(format!(
            "{}...",
            journal.chars().take(EXCERPT_LEN).collect::<String>()
        ))
    }
}

/// Render the human-readable text summary
pub fn render_text_summary(series: &MoodSeries) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("MOOD TRACKING SUMMARY".to_string());
    lines.push("=".repeat(50));
    lines.push(format!(
        "Generated on: {}",
        Utc::now().format("%B %d, %Y at %H:%M UTC")
    ));

    let stats = match series.stats() {
        Some(stats) => stats,
        None => {
            lines.push("No mood entries logged yet.".to_string());
            return lines.join("\n");
        }
    };

    lines.push(format!(
        "Period: {} to {}",
        stats.first_date.format("%B %d, %Y"),
        stats.last_date.format("%B %d, %Y")
    ));
    lines.push(format!("Total entries: {}", stats.total_entries));
    lines.push(String::new());

    lines.push("STATISTICS".to_string());
    lines.push("-".repeat(20));
    lines.push(format!("Average mood: {:.1}/5", stats.average_mood));
    lines.push(format!("Median mood: {:.1}/5", stats.median_mood));
    if let Some(vol) = crate::analytics::analyze_volatility(series) {
        lines.push(format!(
            "Standard deviation: {:.2} ({})",
            vol.standard_deviation, vol.category
        ));
    }
    if let Some(trend) = crate::analytics::analyze_trend(series) {
        lines.push(format!(
            "Recent trend: {} ({:.2} vs {:.2})",
            trend.direction, trend.recent_average, trend.previous_average
        ));
    }
    if let Some(streaks) = crate::analytics::analyze_streaks(series) {
        lines.push(format!("Longest streak: {} days", streaks.longest_streak));
        lines.push(format!(
            "Consistency: {:.0}%",
            streaks.consistency_score * 100.0
        ));
    }
    lines.push(String::new());

    lines.push("MOOD DISTRIBUTION".to_string());
    lines.push("-".repeat(20));
    for (mood, count) in &stats.mood_distribution {
        let percentage = *count as f64 / stats.total_entries as f64 * 100.0;
        lines.push(format!(
            "{}/5: {} entries ({:.1}%)",
            mood, count, percentage
        ));
    }
    lines.push(String::new());

    lines.push("HIGHLIGHTS".to_string());
    lines.push("-".repeat(20));
    if let Some(best) = series.get(stats.best_mood_date) {
        lines.push(format!(
            "Best day: {} ({}/5)",
            best.date.format("%B %d, %Y"),
            best.mood
        ));
        if let Some(text) = excerpt(&best.journal) {
            lines.push(format!("  '{}'", text));
        }
    }
    if let Some(worst) = series.get(stats.worst_mood_date) {
        lines.push(format!(
            "Worst day: {} ({}/5)",
            worst.date.format("%B %d, %Y"),
            worst.mood
        ));
        if let Some(text) = excerpt(&worst.journal) {
            lines.push(format!("  '{}'", text));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn sample_series() -> MoodSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        MoodSeries::from_entries(
            (0..10)
                .map(|i| {
                    MoodEntry::new(start + Duration::days(i), ((i % 5) + 1) as u8)
                        .journal(format!("day {} notes", i))
                })
                .collect(),
        )
    }

    #[test]
    fn test_report_structure() {
        let report = build_report(&sample_series());
        assert_eq!(report.entries.len(), 10);
        assert_eq!(report.entries[0].date, "2024-01-01");
        assert_eq!(report.entries[0].journal_word_count, 3);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["report_info"]["total_entries"], 10);
        assert_eq!(json["report_info"]["date_range"]["start"], "2024-01-01");
        assert!(json["stats"].is_object());
        assert!(json["weekly"].is_object());
    }

    #[test]
    fn test_report_empty_series() {
        let report = build_report(&MoodSeries::default());
        assert!(report.entries.is_empty());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["report_info"]["total_entries"], 0);
        assert!(json["report_info"]["date_range"]["start"].is_null());
    }

    #[test]
    fn test_text_summary_contents() {
        let text = render_text_summary(&sample_series());
        assert!(text.contains("MOOD TRACKING SUMMARY"));
        assert!(text.contains("Total entries: 10"));
        assert!(text.contains("MOOD DISTRIBUTION"));
        assert!(text.contains("HIGHLIGHTS"));
        assert!(text.contains("Best day:"));
    }

    #[test]
    fn test_text_summary_empty() {
        let text = render_text_summary(&MoodSeries::default());
        assert!(text.contains("No mood entries logged yet."));
    }

    #[test]
    fn test_excerpt_truncation() {
        let long = "x".repeat(200);
        let text = excerpt(&long).unwrap();
        assert_eq!(text.chars().count(), EXCERPT_LEN + 3);
        assert!(text.ends_with("..."));

        assert_eq!(excerpt("short"), Some("short".to_string()));
        assert_eq!(excerpt(""), None);
    }
}

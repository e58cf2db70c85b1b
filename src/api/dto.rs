//! Request and response types for the REST API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::MoodEntry;

/// Request body for logging or updating a mood entry
#[derive(Debug, Deserialize)]
pub struct UpsertEntryRequest {
    /// Entry date (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Mood rating, 1-5
    pub mood: u8,

    /// Optional journal text
    #[serde(default)]
    pub journal: String,
}

impl From<UpsertEntryRequest> for MoodEntry {
    fn from(req: UpsertEntryRequest) -> Self {
        MoodEntry::new(req.date, req.mood).journal(req.journal)
    }
}

/// One mood entry as returned by the API
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub date: NaiveDate,
    pub mood: u8,
    pub journal: String,
}

impl From<MoodEntry> for EntryResponse {
    fn from(entry: MoodEntry) -> Self {
        Self {
            date: entry.date,
            mood: entry.mood,
            journal: entry.journal,
        }
    }
}

impl From<&MoodEntry> for EntryResponse {
    fn from(entry: &MoodEntry) -> Self {
        entry.clone().into()
    }
}

/// Query parameters for listing entries
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Query parameters for journal search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Query parameters for export
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default = "default_export_format")]
    pub format: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

fn default_export_format() -> String {
    "json".to_string()
}

/// Query parameters for the report endpoint
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(default = "default_report_format")]
    pub format: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

fn default_report_format() -> String {
    "json".to_string()
}

/// Generic acknowledgement response
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub status: String,
    pub date: NaiveDate,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub entries: usize,
}

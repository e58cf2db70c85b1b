//! Core data types for the moodlog store
//!
//! This module defines the fundamental types used throughout the crate:
//! - `MoodEntry`: one day's mood rating plus optional journal text
//! - `MoodSeries`: a date-ascending, duplicate-free snapshot of the log
//! - `MoodStats`: basic descriptive statistics over a series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::{StorageError, StorageResult};

/// Lowest valid mood rating.
pub const MOOD_MIN: u8 = 1;
/// Highest valid mood rating.
pub const MOOD_MAX: u8 = 5;

/// A single mood journal entry
///
/// At most one entry exists per calendar date; saving again on the same
/// date replaces the previous entry (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodEntry {
    /// Calendar date of the entry (unique key)
    pub date: NaiveDate,
    /// Mood rating on a 1-5 scale
    pub mood: u8,
    /// Free-text journal, possibly empty
    #[serde(default)]
    pub journal: String,
}

impl MoodEntry {
    /// Create an entry with an empty journal
    pub fn new(date: NaiveDate, mood: u8) -> Self {
        Self {
            date,
            mood,
            journal: String::new(),
        }
    }

    /// Builder method: attach journal text
    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = journal.into();
        self
    }

    /// Validate the mood rating against the 1-5 scale
    pub fn validate(&self) -> StorageResult<()> {
        if self.mood < MOOD_MIN || self.mood > MOOD_MAX {
            return Err(StorageError::InvalidMood(self.mood));
        }
        Ok(())
    }

    /// Journal length in characters (0 if empty)
    pub fn journal_len(&self) -> usize {
        self.journal.chars().count()
    }
}

/// An immutable, date-ascending sequence of mood entries
///
/// This is the sole input to every analytics operation. It is constructed
/// fresh from the store per analysis request; analytics never mutate it or
/// reach back into storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodSeries {
    entries: Vec<MoodEntry>,
}

impl MoodSeries {
    /// Build a series from entries in any order
    ///
    /// Sorts by date ascending. Duplicate dates collapse to the last
    /// occurrence, matching the store's last-write-wins contract.
    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, MoodEntry> = BTreeMap::new();
        for entry in entries {
            by_date.insert(entry.date, entry);
        }
        Self {
            entries: by_date.into_values().collect(),
        }
    }

    /// Entries in date-ascending order
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a specific date, if logged
    pub fn get(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries
            .binary_search_by_key(&date, |e| e.date)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Sub-series restricted to an inclusive date range
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> MoodSeries {
        MoodSeries {
            entries: self
                .entries
                .iter()
                .filter(|e| e.date >= start && e.date <= end)
                .cloned()
                .collect(),
        }
    }

    /// Mood values in date order
    pub fn moods(&self) -> Vec<f64> {
        self.entries.iter().map(|e| f64::from(e.mood)).collect()
    }

    /// First entry date, if any
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.date)
    }

    /// Last entry date, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.date)
    }

    /// Basic descriptive statistics, or None for an empty series
    pub fn stats(&self) -> Option<MoodStats> {
        if self.entries.is_empty() {
            return None;
        }

        let moods = self.moods();
        let total = moods.len();
        let average = moods.iter().sum::<f64>() / total as f64;

        let mut sorted = moods.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = if total % 2 == 0 {
            (sorted[total / 2 - 1] + sorted[total / 2]) / 2.0
        } else {
            sorted[total / 2]
        };

        let mut distribution: BTreeMap<u8, usize> = BTreeMap::new();
        for entry in &self.entries {
            *distribution.entry(entry.mood).or_insert(0) += 1;
        }

        // First occurrence wins on ties
        let best = self.entries.iter().fold(&self.entries[0], |acc, e| {
            if e.mood > acc.mood {
                e
            } else {
                acc
            }
        });
        let worst = self.entries.iter().fold(&self.entries[0], |acc, e| {
            if e.mood < acc.mood {
                e
            } else {
                acc
            }
        });

        Some(MoodStats {
            total_entries: total,
            average_mood: average,
            median_mood: median,
            mood_distribution: distribution,
            best_mood_date: best.date,
            worst_mood_date: worst.date,
            first_date: self.first_date()?,
            last_date: self.last_date()?,
        })
    }
}

/// Basic mood statistics over a series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodStats {
    /// Number of logged entries
    pub total_entries: usize,
    /// Mean mood rating
    pub average_mood: f64,
    /// Median mood rating
    pub median_mood: f64,
    /// Count of entries per rating value
    pub mood_distribution: BTreeMap<u8, usize>,
    /// Date of the highest-rated entry (first occurrence on ties)
    pub best_mood_date: NaiveDate,
    /// Date of the lowest-rated entry (first occurrence on ties)
    pub worst_mood_date: NaiveDate,
    /// Earliest entry date
    pub first_date: NaiveDate,
    /// Latest entry date
    pub last_date: NaiveDate,
}

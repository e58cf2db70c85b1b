//! Mood store
//!
//! A single flat CSV file (`date,mood,journal`) holding at most one entry
//! per date. Writes rewrite the whole file; last write wins. The store keeps
//! an in-memory copy behind Tokio's async RwLock so API handlers can read
//! concurrently, and hands out an immutable `MoodSeries` snapshot per call.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::types::{MoodEntry, MoodSeries, MoodStats};

/// Configuration for the mood store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the CSV log file
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("mood_log.csv"),
        }
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// CSV-backed mood entry store
pub struct MoodStore {
    config: StoreConfig,
    entries: RwLock<BTreeMap<NaiveDate, MoodEntry>>,
}

impl MoodStore {
    /// Open the store, creating the CSV file with headers if missing
    pub fn open(config: StoreConfig) -> StorageResult<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let entries = if config.path.exists() {
            read_csv(&config.path)?
        } else {
            write_csv(&config.path, &BTreeMap::new())?;
            BTreeMap::new()
        };

        tracing::info!(
            path = %config.path.display(),
            entries = entries.len(),
            "Opened mood store"
        );

        Ok(Self {
            config,
            entries: RwLock::new(entries),
        })
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Save or update an entry (last write wins per date)
    pub async fn upsert(&self, entry: MoodEntry) -> StorageResult<()> {
        entry.validate()?;

        let mut entries = self.entries.write().await;
        let replaced = entries.insert(entry.date, entry.clone()).is_some();
        write_csv(&self.config.path, &entries)?;

        tracing::debug!(
            date = %entry.date,
            mood = entry.mood,
            replaced,
            "Saved mood entry"
        );
        Ok(())
    }

    /// Remove the entry for a date
    pub async fn delete(&self, date: NaiveDate) -> StorageResult<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(&date).is_none() {
            return Err(StorageError::EntryNotFound(date));
        }
        write_csv(&self.config.path, &entries)?;
        Ok(())
    }

    /// Entry for a specific date
    pub async fn get(&self, date: NaiveDate) -> Option<MoodEntry> {
        self.entries.read().await.get(&date).cloned()
    }

    /// Immutable snapshot of the full log, date ascending
    pub async fn load(&self) -> MoodSeries {
        let entries = self.entries.read().await;
        MoodSeries::from_entries(entries.values().cloned().collect())
    }

    /// Snapshot restricted to an inclusive date range
    pub async fn range(&self, start: NaiveDate, end: NaiveDate) -> MoodSeries {
        let entries = self.entries.read().await;
        MoodSeries::from_entries(
            entries
                .range(start..=end)
                .map(|(_, e)| e.clone())
                .collect(),
        )
    }

    /// Entries whose journal contains the query, case-insensitive
    pub async fn search(&self, query: &str) -> Vec<MoodEntry> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.entries
            .read()
            .await
            .values()
            .filter(|e| e.journal.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Number of logged entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Basic statistics over the full log
    pub async fn statistics(&self) -> Option<MoodStats> {
        self.load().await.stats()
    }

    /// Length of the consecutive-day run ending on `today`
    ///
    /// 0 when today has no entry.
    pub async fn current_streak(&self, today: NaiveDate) -> usize {
        let entries = self.entries.read().await;
        let mut streak = 0;
        let mut cursor = today;
        while entries.contains_key(&cursor) {
            streak += 1;
            match cursor.pred_opt() {
                Some(prev) => cursor = prev,
                None => break,
            }
        }
        streak
    }
}

/// Read all entries from the CSV file
fn read_csv(path: &Path) -> StorageResult<BTreeMap<NaiveDate, MoodEntry>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = BTreeMap::new();

    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2; // 1-based, after header
        let record = record?;

        let date_str = record.get(0).unwrap_or("");
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            StorageError::InvalidDate {
                value: date_str.to_string(),
            }
        })?;

        let mood: u8 = record
            .get(1)
            .unwrap_or("")
            .trim()
            .parse()
            .map_err(|_| StorageError::CorruptEntry {
                line,
                reason: format!("mood {:?} is not an integer", record.get(1).unwrap_or("")),
            })?;

        let journal = record.get(2).unwrap_or("").to_string();

        let entry = MoodEntry {
            date,
            mood,
            journal,
        };
        entry.validate()?;

        // Duplicate dates in the file collapse to the last occurrence
        entries.insert(date, entry);
    }

    Ok(entries)
}

/// Rewrite the CSV file from scratch
fn write_csv(path: &Path, entries: &BTreeMap<NaiveDate, MoodEntry>) -> StorageResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "mood", "journal"])?;

    for entry in entries.values() {
        writer.write_record([
            entry.date.format("%Y-%m-%d").to_string(),
            entry.mood.to_string(),
            entry.journal.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn test_store(dir: &tempfile::TempDir) -> MoodStore {
        MoodStore::open(StoreConfig::new(dir.path().join("mood_log.csv"))).unwrap()
    }

    #[tokio::test]
    async fn test_open_creates_file_with_header() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("date,mood,journal"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        store
            .upsert(MoodEntry::new(date("2024-01-01"), 4).journal("good day"))
            .await
            .unwrap();

        let entry = store.get(date("2024-01-01")).await.unwrap();
        assert_eq!(entry.mood, 4);
        assert_eq!(entry.journal, "good day");
    }

    #[tokio::test]
    async fn test_upsert_replaces_same_date() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        store
            .upsert(MoodEntry::new(date("2024-01-01"), 2))
            .await
            .unwrap();
        store
            .upsert(MoodEntry::new(date("2024-01-01"), 5).journal("revised"))
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        let entry = store.get(date("2024-01-01")).await.unwrap();
        assert_eq!(entry.mood, 5);
        assert_eq!(entry.journal, "revised");
    }

    #[tokio::test]
    async fn test_upsert_rejects_invalid_mood() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        let result = store.upsert(MoodEntry::new(date("2024-01-01"), 7)).await;
        assert!(matches!(result, Err(StorageError::InvalidMood(7))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood_log.csv");

        {
            let store = MoodStore::open(StoreConfig::new(&path)).unwrap();
            store
                .upsert(MoodEntry::new(date("2024-01-02"), 3).journal("with, comma and \"quotes\""))
                .await
                .unwrap();
            store
                .upsert(MoodEntry::new(date("2024-01-01"), 4))
                .await
                .unwrap();
        }

        let store = MoodStore::open(StoreConfig::new(&path)).unwrap();
        let series = store.load().await;
        assert_eq!(series.len(), 2);
        // Sorted ascending regardless of insert order
        assert_eq!(series.first_date(), Some(date("2024-01-01")));
        assert_eq!(
            series.get(date("2024-01-02")).unwrap().journal,
            "with, comma and \"quotes\""
        );
    }

    #[tokio::test]
    async fn test_range_inclusive() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        for (d, m) in [("2024-01-01", 3), ("2024-01-05", 4), ("2024-01-10", 2)] {
            store.upsert(MoodEntry::new(date(d), m)).await.unwrap();
        }

        let series = store.range(date("2024-01-01"), date("2024-01-05")).await;
        assert_eq!(series.len(), 2);
    }

    #[tokio::test]
    async fn test_search_case_insensitive() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        store
            .upsert(MoodEntry::new(date("2024-01-01"), 4).journal("Went hiking today"))
            .await
            .unwrap();
        store
            .upsert(MoodEntry::new(date("2024-01-02"), 2).journal("stuck inside"))
            .await
            .unwrap();

        let hits = store.search("HIKING").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date, date("2024-01-01"));

        assert!(store.search("").await.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        store
            .upsert(MoodEntry::new(date("2024-01-01"), 3))
            .await
            .unwrap();
        store.delete(date("2024-01-01")).await.unwrap();
        assert!(store.is_empty().await);

        let result = store.delete(date("2024-01-01")).await;
        assert!(matches!(result, Err(StorageError::EntryNotFound(_))));
    }

    #[tokio::test]
    async fn test_current_streak() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        for d in ["2024-01-08", "2024-01-09", "2024-01-10"] {
            store.upsert(MoodEntry::new(date(d), 3)).await.unwrap();
        }
        // Gap before the run
        store
            .upsert(MoodEntry::new(date("2024-01-05"), 4))
            .await
            .unwrap();

        assert_eq!(store.current_streak(date("2024-01-10")).await, 3);
        assert_eq!(store.current_streak(date("2024-01-11")).await, 0);
    }

    #[tokio::test]
    async fn test_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood_log.csv");
        std::fs::write(&path, "date,mood,journal\n2024-01-01,not-a-number,\n").unwrap();

        let result = MoodStore::open(StoreConfig::new(&path));
        assert!(matches!(result, Err(StorageError::CorruptEntry { .. })));
    }
}

//! Storage error types
//!
//! Defines all errors that can occur in the storage layer. Validation of
//! entries (mood range, date parsing) happens here at the store boundary;
//! the analytics engine assumes a valid series.

use thiserror::Error;

/// Errors that can occur in the mood store
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Mood rating outside the 1-5 scale
    #[error("Invalid mood rating {0}: must be between 1 and 5")]
    InvalidMood(u8),

    /// Unparseable date string in the store file or a request
    #[error("Invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Malformed row in the store file
    #[error("Corrupt entry at line {line}: {reason}")]
    CorruptEntry { line: usize, reason: String },

    /// No entry logged for the requested date
    #[error("No entry for date {0}")]
    EntryNotFound(chrono::NaiveDate),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

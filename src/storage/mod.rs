//! Mood entry storage
//!
//! A flat CSV store holding one mood entry per calendar date. The store
//! validates entries at the boundary (mood range, parseable dates) and hands
//! analytics an immutable [`MoodSeries`] snapshot per request.

pub mod error;
pub mod store;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use store::{MoodStore, StoreConfig};
pub use types::{MoodEntry, MoodSeries, MoodStats, MOOD_MAX, MOOD_MIN};

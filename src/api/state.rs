//! Shared API state

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::storage::MoodStore;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Mood store handle
    pub store: Arc<MoodStore>,

    /// Loaded configuration
    pub config: Arc<Config>,

    /// Server start time, for uptime reporting
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<MoodStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Seconds since the server started
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

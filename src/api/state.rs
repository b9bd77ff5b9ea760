//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dataset::DatasetLoader;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loader for the student dataset
    pub loader: Arc<DatasetLoader>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(loader: Arc<DatasetLoader>, config: ServerConfig) -> Self {
        Self {
            loader,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

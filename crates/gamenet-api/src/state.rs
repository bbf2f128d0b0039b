//! Application state management

use gamenet_core::{Config, Dataset, Result};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Records served by the grids; never mutated after startup
    pub dataset: Arc<Dataset>,
    /// When the state was built
    pub started_at: Instant,
}

impl AppState {
    /// Create new application state
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or a dataset record is invalid.
    pub fn new(config: Config, dataset: Dataset) -> Result<Self> {
        config.validate()?;
        dataset.validate()?;

        Ok(Self {
            config,
            dataset: Arc::new(dataset),
            started_at: Instant::now(),
        })
    }

    /// Seconds since the state was built
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

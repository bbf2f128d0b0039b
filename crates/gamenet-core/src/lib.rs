//! Data grid pipeline, dashboard records and shared utilities for the gamenet admin

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod grid;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use crate::config::Config;
pub use error::{Error, Result};
pub use grid::{Column, GridPage, GridQuery, GridRecord, SortDirection, SortState, evaluate};
pub use types::{Dataset, Payment, Subscription};

use crate::config::LoggingConfig;

/// Initialize the logging system
///
/// `RUST_LOG` overrides the configured level. The format is `json` or
/// anything else for human-readable text.
///
/// # Errors
///
/// Returns an error if the level is not a valid filter or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| Error::Configuration {
            message: format!("invalid log level '{}': {e}", config.level),
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.format.eq_ignore_ascii_case("json") {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    result.map_err(|e| Error::Other(format!("failed to install logger: {e}")))
}

//! Configuration management for the gamenet admin

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Data grid configuration
    #[serde(default)]
    pub grid: GridConfig,
    /// Dataset configuration
    #[serde(default)]
    pub data: DataConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Data grid configuration shared by every listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Page size used when the client does not ask for one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Largest page size a client may request
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
    /// Pages shown on each side of the current page in the page window
    #[serde(default = "default_page_window_radius")]
    pub page_window_radius: u32,
}

/// Dataset configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file holding `payments` and `subscriptions` arrays
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Shorthand for `GAMENET_DATA__SEED_FILE`
pub const SEED_FILE_VAR: &str = "GAMENET_SEED_FILE";

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_request_timeout() -> u64 {
    30
}

const fn default_page_size() -> u32 {
    10
}

const fn default_max_page_size() -> u32 {
    100
}

const fn default_page_window_radius() -> u32 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            page_window_radius: default_page_window_radius(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            grid: GridConfig::default(),
            data: DataConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from an optional `config` file and `GAMENET_*` environment variables
    ///
    /// Nested keys use a double underscore, e.g. `GAMENET_GRID__MAX_PAGE_SIZE=50`.
    /// [`SEED_FILE_VAR`] is also accepted and wins over `GAMENET_DATA__SEED_FILE`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// [`Config::load`] reading variables from `vars` instead of the process environment
    fn load_from(vars: Option<config::Map<String, String>>) -> crate::Result<Self> {
        let seed_file = match &vars {
            Some(vars) => vars.get(SEED_FILE_VAR).cloned(),
            None => std::env::var(SEED_FILE_VAR).ok(),
        };

        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("GAMENET")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .set_override_option("data.seed_file", seed_file)?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde defaults cannot express
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending key.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(crate::Error::validation("server.host", "must not be empty"));
        }
        if self.grid.default_page_size == 0 {
            return Err(crate::Error::validation(
                "grid.default_page_size",
                "must be at least 1",
            ));
        }
        if self.grid.default_page_size > self.grid.max_page_size {
            return Err(crate::Error::validation(
                "grid.default_page_size",
                format!("must not exceed grid.max_page_size ({})", self.grid.max_page_size),
            ));
        }
        Ok(())
    }
}

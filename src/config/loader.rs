use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::geo::Coordinate;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/taxi-map/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("taxi-map").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns `Config::default()` when the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Reads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Places base URL is http(s)
    /// - Timeouts and the simulation interval are non-zero
    /// - The simulated start position is a valid coordinate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.places.base_url;
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::ValidationError {
                message: format!("places.base_url must be an http(s) URL, got '{}'", base_url),
            });
        }

        if self.places.timeout_seconds == 0 || self.places.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "places timeouts must be greater than zero".to_string(),
            });
        }

        if self.location.simulated_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "location.simulated_interval_ms must be greater than zero".to_string(),
            });
        }

        if let Err(err) = self.start_coordinate() {
            return Err(ConfigError::ValidationError {
                message: format!("location start position: {}", err),
            });
        }

        Ok(())
    }

    /// Starting point of the simulated route.
    pub fn start_coordinate(&self) -> Result<Coordinate, crate::geo::ValidationError> {
        Coordinate::new(
            self.location.default_latitude,
            self.location.default_longitude,
        )
    }
}

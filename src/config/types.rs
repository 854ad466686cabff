use serde::{Deserialize, Serialize};

/// Environment variable that overrides `places.api_key`.
pub const API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Places autocomplete settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Base URL of the Places web API.
    #[serde(default = "default_places_base_url")]
    pub base_url: String,
    /// API key; `GOOGLE_PLACES_API_KEY` takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Preferred result language (e.g. "en", "hy").
    #[serde(default)]
    pub language: Option<String>,
    /// Restrict results to one country (ISO 3166-1 alpha-2).
    #[serde(default)]
    pub country: Option<String>,
}

/// Simulated location service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Interval between simulated fixes in milliseconds (default: 1000).
    #[serde(default = "default_simulated_interval_ms")]
    pub simulated_interval_ms: u64,
    /// Starting latitude of the simulated route.
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    /// Starting longitude of the simulated route.
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_places_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_simulated_interval_ms() -> u64 {
    1000
}

fn default_latitude() -> f64 {
    40.1792
}

fn default_longitude() -> f64 {
    44.4991
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PlacesConfig {
    /// API key from the environment, falling back to the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_places_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            language: None,
            country: None,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            simulated_interval_ms: default_simulated_interval_ms(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

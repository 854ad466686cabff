//! Configuration loading.
//!
//! Settings live in a TOML file under the user config directory; every
//! field has a default so a missing file is valid.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LocationConfig, LoggingConfig, PlacesConfig, API_KEY_ENV};

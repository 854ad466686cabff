//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_places;
pub mod stub_provider;

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use taxi_map::geo::Coordinate;

/// Generous upper bound for waits on async state.
pub const WAIT: Duration = Duration::from_secs(2);

pub fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).expect("valid test coordinate")
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

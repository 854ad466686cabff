//! Geographic value types shared by the map screen and location client.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid coordinate: lat={0}, lon={1}")]
    InvalidCoordinate(f64, f64),
}

/// WGS84 coordinate. NaN and out-of-range values are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(ValidationError::InvalidCoordinate(latitude, longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// A fix reported by the location service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub coordinate: Coordinate,
    /// Radius of uncertainty in meters, when known.
    pub horizontal_accuracy: Option<f64>,
}

impl Location {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            horizontal_accuracy: None,
        }
    }
}

/// Camera position of the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPosition {
    pub target: Coordinate,
    pub zoom: f32,
    pub bearing: f64,
    pub viewing_angle: f64,
}

impl CameraPosition {
    pub fn new(target: Coordinate, zoom: f32) -> Self {
        Self {
            target,
            zoom,
            bearing: 0.0,
            viewing_angle: 0.0,
        }
    }
}

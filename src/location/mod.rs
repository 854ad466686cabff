//! Location service abstraction.
//!
//! The map screen consumes location through [`LocationManagerClient`]: a
//! delegate event stream plus fire-and-forget requests whose outcomes are
//! reported on that stream.

mod client;
mod simulated;

pub use client::{AuthorizationStatus, DelegateEvent, LocationError, LocationManagerClient};
pub use simulated::SimulatedLocationManager;

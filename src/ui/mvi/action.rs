//! Base trait for actions in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - View events (screen loaded, button taps, camera idle)
/// - Internal events produced by effects (location updates, responses)
///
/// Actions are processed by reducers to produce new states and effects.
pub trait Action: Debug + Send + 'static {}

//! Map screen core for a ride-hailing client.
//!
//! - [`ui::map`]: reducer-driven map screen (location tracking, camera events)
//! - [`ui::store`]: runtime that applies actions in order and runs effects
//! - [`places`]: async client over a callback-style Places autocomplete provider
//! - [`location`]: location service abstraction and a simulated implementation

pub mod application;
pub mod config;
pub mod geo;
pub mod lifetime;
pub mod location;
pub mod logging;
pub mod places;
pub mod ui;

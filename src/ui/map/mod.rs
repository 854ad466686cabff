//! Map screen feature module.
//!
//! Tracks the user's position on the map and reacts to view events.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state (last known user location)
//! - `action.rs` - View actions and internal (effect-originated) actions
//! - `reducer.rs` - Map core transitions
//! - `user_location.rs` - Location request/decoding sub-reducer

mod action;
mod reducer;
mod state;
mod user_location;

pub use action::{InternalAction, MapAction, MapBinding, ViewAction};
pub use reducer::MapReducer;
pub use state::MapState;
pub use user_location::UserLocationReducer;

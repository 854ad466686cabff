//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the screen layer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          ↓
//!    └─────── Effect
//! ```
//!
//! - **State**: Snapshot of screen state, owned by the store
//! - **Action**: View events or effect results
//! - **Reducer**: Pure function (State, Action) -> (State, Effect)
//! - **Effect**: Description of async work whose results re-enter as actions

mod action;
mod effect;
mod reducer;
mod state;

pub use action::Action;
pub use effect::Effect;
pub use reducer::Reducer;
pub use state::UiState;

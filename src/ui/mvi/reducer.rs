//! Reducer trait for MVI architecture.

use super::action::Action;
use super::effect::Effect;
use super::state::UiState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen. It never
/// performs side effects itself: anything asynchronous is described as an
/// [`Effect`] and executed by the store, whose results come back as actions.
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action, returning the new state and the effect to run.
    fn reduce(
        &self,
        state: Self::State,
        action: Self::Action,
    ) -> (Self::State, Effect<Self::Action>);
}

//! State for the map screen.

use crate::geo::Coordinate;
use crate::ui::mvi::UiState;

/// Map screen state.
///
/// `user_location` only ever holds a coordinate reported by the location
/// service (or written back by the view through a binding).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapState {
    pub user_location: Option<Coordinate>,
}

impl UiState for MapState {}

impl MapState {
    pub fn has_user_location(&self) -> bool {
        self.user_location.is_some()
    }
}

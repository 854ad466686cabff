//! Actions for the map screen.

use crate::geo::{CameraPosition, Coordinate};
use crate::location::DelegateEvent;
use crate::ui::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum MapAction {
    View(ViewAction),
    Internal(InternalAction),
}

impl Action for MapAction {}

/// Actions sent by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// Screen appeared; starts listening to the location service.
    OnViewLoad,

    /// "Current location" button tapped.
    OnLocationButtonTap,

    /// Camera stopped moving.
    OnMapViewIdleAtPosition(CameraPosition),

    /// User asked to open the system location settings.
    OnOpenSettingsTap,

    /// Two-way binding written back by the view.
    Binding(MapBinding),
}

/// Fields the view is allowed to write directly.
#[derive(Debug, Clone, PartialEq)]
pub enum MapBinding {
    UserLocation(Option<Coordinate>),
}

/// Actions produced by effects.
#[derive(Debug, Clone, PartialEq)]
pub enum InternalAction {
    /// Ask the location service for a fresh fix.
    UpdateLocation,

    /// Event forwarded from the location service delegate.
    LocationManager(DelegateEvent),

    /// Most recent user position decoded from a location event.
    LastUserLocation(Coordinate),
}

impl Action for InternalAction {}

impl From<ViewAction> for MapAction {
    fn from(action: ViewAction) -> Self {
        MapAction::View(action)
    }
}

impl From<InternalAction> for MapAction {
    fn from(action: InternalAction) -> Self {
        MapAction::Internal(action)
    }
}

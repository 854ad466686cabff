//! Reducer for the user-location part of the map screen.
//!
//! Turns location requests into calls on the location service and decodes
//! delegate events into `LastUserLocation`. It is the only producer of that
//! action.

use std::sync::Arc;

use crate::location::{AuthorizationStatus, DelegateEvent, LocationManagerClient};
use crate::ui::mvi::{Effect, Reducer};

use super::action::InternalAction;
use super::state::MapState;

pub struct UserLocationReducer {
    location: Arc<dyn LocationManagerClient>,
}

impl UserLocationReducer {
    pub fn new(location: Arc<dyn LocationManagerClient>) -> Self {
        Self { location }
    }

    fn request_location(&self) -> Effect<InternalAction> {
        let client = Arc::clone(&self.location);
        Effect::fire_and_forget(async move {
            match client.authorization_status() {
                AuthorizationStatus::NotDetermined => client.request_when_in_use_authorization(),
                status if status.is_authorized() => client.request_location(),
                status => tracing::warn!(?status, "location permission unavailable"),
            }
        })
    }
}

impl Reducer for UserLocationReducer {
    type State = MapState;
    type Action = InternalAction;

    fn reduce(&self, state: MapState, action: InternalAction) -> (MapState, Effect<InternalAction>) {
        let effect = match action {
            InternalAction::UpdateLocation => self.request_location(),

            InternalAction::LocationManager(DelegateEvent::DidChangeAuthorization(status)) => {
                tracing::debug!(?status, "location authorization changed");
                if status.is_authorized() {
                    self.request_location()
                } else {
                    Effect::None
                }
            }

            InternalAction::LocationManager(DelegateEvent::DidUpdateLocations(locations)) => {
                match locations.last() {
                    Some(location) => {
                        Effect::Send(InternalAction::LastUserLocation(location.coordinate))
                    }
                    None => Effect::None,
                }
            }

            InternalAction::LocationManager(DelegateEvent::DidFailWithError(error)) => {
                tracing::warn!(%error, "location update failed");
                Effect::None
            }

            InternalAction::LastUserLocation(_) => Effect::None,
        };
        (state, effect)
    }
}

//! Reducer for the map screen.

use std::sync::Arc;

use futures::StreamExt;

use crate::application::{settings_url, UrlOpener};
use crate::location::LocationManagerClient;
use crate::ui::mvi::{Effect, Reducer};

use super::action::{InternalAction, MapAction, MapBinding, ViewAction};
use super::state::MapState;
use super::user_location::UserLocationReducer;

/// Map screen reducer.
///
/// Collaborators are injected at construction. Internal actions are handled
/// by the map core first and then by [`UserLocationReducer`].
pub struct MapReducer {
    location: Arc<dyn LocationManagerClient>,
    open_url: Arc<dyn UrlOpener>,
    user_location: UserLocationReducer,
}

impl MapReducer {
    pub fn new(location: Arc<dyn LocationManagerClient>, open_url: Arc<dyn UrlOpener>) -> Self {
        Self {
            user_location: UserLocationReducer::new(Arc::clone(&location)),
            location,
            open_url,
        }
    }

    fn reduce_view(&self, mut state: MapState, action: ViewAction) -> (MapState, Effect<MapAction>) {
        match action {
            ViewAction::OnViewLoad => {
                let events = self.location.delegate();
                let effect = Effect::run(
                    events.map(|event| MapAction::Internal(InternalAction::LocationManager(event))),
                );
                (state, effect)
            }

            ViewAction::OnLocationButtonTap => {
                (state, Effect::Send(MapAction::Internal(InternalAction::UpdateLocation)))
            }

            ViewAction::OnMapViewIdleAtPosition(position) => {
                tracing::info!(
                    latitude = position.target.latitude(),
                    longitude = position.target.longitude(),
                    "map view idle at position"
                );
                (state, Effect::None)
            }

            ViewAction::OnOpenSettingsTap => {
                let open_url = Arc::clone(&self.open_url);
                let effect = Effect::fire_and_forget(async move {
                    let url = match settings_url() {
                        Ok(url) => url,
                        Err(error) => {
                            tracing::error!(%error, "invalid location settings url");
                            return;
                        }
                    };
                    if !open_url.open(url.clone()).await {
                        tracing::warn!(url = %url, "failed to open location settings");
                    }
                });
                (state, effect)
            }

            ViewAction::Binding(MapBinding::UserLocation(location)) => {
                state.user_location = location;
                (state, Effect::None)
            }
        }
    }

    fn reduce_internal(
        &self,
        mut state: MapState,
        action: InternalAction,
    ) -> (MapState, Effect<MapAction>) {
        if let InternalAction::LastUserLocation(coordinate) = &action {
            state.user_location = Some(*coordinate);
        }

        let (state, effect) = self.user_location.reduce(state, action);
        (state, effect.map(MapAction::Internal))
    }
}

impl Reducer for MapReducer {
    type State = MapState;
    type Action = MapAction;

    fn reduce(&self, state: MapState, action: MapAction) -> (MapState, Effect<MapAction>) {
        match action {
            MapAction::View(action) => self.reduce_view(state, action),
            MapAction::Internal(action) => self.reduce_internal(state, action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{CameraPosition, Coordinate, Location};
    use crate::location::{AuthorizationStatus, DelegateEvent, SimulatedLocationManager};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use url::Url;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<Url>>,
    }

    #[async_trait]
    impl UrlOpener for RecordingOpener {
        async fn open(&self, url: Url) -> bool {
            self.opened.lock().push(url);
            true
        }
    }

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn reducer_with(manager: &SimulatedLocationManager) -> (MapReducer, Arc<RecordingOpener>) {
        let opener = Arc::new(RecordingOpener::default());
        let reducer = MapReducer::new(Arc::new(manager.clone()), opener.clone());
        (reducer, opener)
    }

    fn reducer() -> MapReducer {
        reducer_with(&SimulatedLocationManager::new(AuthorizationStatus::AuthorizedWhenInUse)).0
    }

    #[test]
    fn last_user_location_sets_state() {
        let (state, effect) = reducer().reduce(
            MapState::default(),
            MapAction::Internal(InternalAction::LastUserLocation(coord(37.0, -122.0))),
        );
        assert_eq!(
            state,
            MapState {
                user_location: Some(coord(37.0, -122.0))
            }
        );
        assert!(effect.is_none());
    }

    #[test]
    fn last_user_location_overwrites_previous_fix() {
        let state = MapState {
            user_location: Some(coord(1.0, 1.0)),
        };
        let (state, _) = reducer().reduce(
            state,
            MapAction::Internal(InternalAction::LastUserLocation(coord(2.0, 2.0))),
        );
        assert_eq!(state.user_location, Some(coord(2.0, 2.0)));
    }

    #[test]
    fn location_button_sends_single_update_location() {
        let initial = MapState {
            user_location: Some(coord(1.0, 1.0)),
        };
        let (state, effect) = reducer().reduce(
            initial.clone(),
            MapAction::View(ViewAction::OnLocationButtonTap),
        );
        assert_eq!(state, initial);
        assert!(matches!(
            effect,
            Effect::Send(MapAction::Internal(InternalAction::UpdateLocation))
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn camera_idle_logs_target_coordinates() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let position = CameraPosition::new(coord(40.5, 44.25), 15.0);
        tracing::subscriber::with_default(subscriber, || {
            reducer().reduce(
                MapState::default(),
                MapAction::View(ViewAction::OnMapViewIdleAtPosition(position)),
            )
        });

        let output = log.contents();
        let line = output
            .lines()
            .find(|line| line.contains("map view idle at position"))
            .unwrap_or_else(|| panic!("no camera idle record in {:?}", output));
        assert!(line.contains("INFO"));
        assert!(line.contains("latitude=40.5"));
        assert!(line.contains("longitude=44.25"));
    }

    #[test]
    fn camera_idle_does_not_touch_state() {
        let position = CameraPosition::new(coord(40.0, 44.0), 15.0);
        let (state, effect) = reducer().reduce(
            MapState::default(),
            MapAction::View(ViewAction::OnMapViewIdleAtPosition(position)),
        );
        assert_eq!(state, MapState::default());
        assert!(effect.is_none());
    }

    #[test]
    fn binding_writes_user_location() {
        let reducer = reducer();
        let (state, effect) = reducer.reduce(
            MapState::default(),
            MapAction::View(ViewAction::Binding(MapBinding::UserLocation(Some(coord(3.0, 4.0))))),
        );
        assert_eq!(state.user_location, Some(coord(3.0, 4.0)));
        assert!(effect.is_none());

        let (state, _) = reducer.reduce(
            state,
            MapAction::View(ViewAction::Binding(MapBinding::UserLocation(None))),
        );
        assert_eq!(state.user_location, None);
    }

    #[test]
    fn location_events_never_set_state_directly() {
        let event = DelegateEvent::DidUpdateLocations(vec![Location::new(coord(9.0, 9.0))]);
        let (state, effect) = reducer().reduce(
            MapState::default(),
            MapAction::Internal(InternalAction::LocationManager(event)),
        );
        assert_eq!(state.user_location, None);
        assert!(matches!(
            effect,
            Effect::Send(MapAction::Internal(InternalAction::LastUserLocation(c))) if c == coord(9.0, 9.0)
        ));
    }

    #[tokio::test]
    async fn view_load_subscribes_to_location_events() {
        let manager = SimulatedLocationManager::new(AuthorizationStatus::AuthorizedWhenInUse);
        let (reducer, _) = reducer_with(&manager);

        let (state, effect) = reducer.reduce(MapState::default(), MapAction::View(ViewAction::OnViewLoad));
        assert_eq!(state, MapState::default());
        assert_eq!(manager.subscriber_count(), 1);

        let mut stream = match effect {
            Effect::Stream(stream) => stream,
            other => panic!("Expected Stream, got {:?}", other),
        };

        let event = DelegateEvent::DidChangeAuthorization(AuthorizationStatus::Denied);
        manager.emit(event.clone());
        assert_eq!(
            stream.next().await,
            Some(MapAction::Internal(InternalAction::LocationManager(event)))
        );
    }

    #[tokio::test]
    async fn open_settings_uses_injected_opener() {
        let manager = SimulatedLocationManager::new(AuthorizationStatus::Denied);
        let (reducer, opener) = reducer_with(&manager);

        let (_, effect) = reducer.reduce(MapState::default(), MapAction::View(ViewAction::OnOpenSettingsTap));
        match effect {
            Effect::Future(future) => assert_eq!(future.await, None),
            other => panic!("Expected Future, got {:?}", other),
        }

        assert_eq!(opener.opened.lock().as_slice(), &[settings_url().unwrap()]);
    }
}

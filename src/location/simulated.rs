//! In-process location service driven by code instead of hardware.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::client::{AuthorizationStatus, DelegateEvent, LocationError, LocationManagerClient};
use crate::geo::{Coordinate, Location};

#[derive(Clone)]
pub struct SimulatedLocationManager {
    inner: Arc<Inner>,
}

struct Inner {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<DelegateEvent>>>,
    authorization: Mutex<AuthorizationStatus>,
    position: Mutex<Option<Location>>,
    /// Status applied when authorization is requested while undetermined.
    grant: AuthorizationStatus,
}

impl SimulatedLocationManager {
    pub fn new(authorization: AuthorizationStatus) -> Self {
        Self::with_grant(authorization, AuthorizationStatus::AuthorizedWhenInUse)
    }

    /// Manager whose authorization prompt resolves to `grant`.
    pub fn with_grant(authorization: AuthorizationStatus, grant: AuthorizationStatus) -> Self {
        Self {
            inner: Arc::new(Inner {
                subscribers: Mutex::new(Vec::new()),
                authorization: Mutex::new(authorization),
                position: Mutex::new(None),
                grant,
            }),
        }
    }

    /// Set the position without notifying subscribers.
    pub fn set_position(&self, coordinate: Coordinate) {
        *self.inner.position.lock() = Some(Location::new(coordinate));
    }

    pub fn position(&self) -> Option<Location> {
        *self.inner.position.lock()
    }

    pub fn set_authorization(&self, status: AuthorizationStatus) {
        *self.inner.authorization.lock() = status;
        self.emit(DelegateEvent::DidChangeAuthorization(status));
    }

    /// Deliver an event to every live subscription.
    pub fn emit(&self, event: DelegateEvent) {
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    /// Move along `route`, reporting each point as a location update.
    pub async fn drive_route(&self, route: Vec<Coordinate>, interval: Duration) {
        for coordinate in route {
            self.set_position(coordinate);
            self.emit(DelegateEvent::DidUpdateLocations(vec![Location::new(coordinate)]));
            tokio::time::sleep(interval).await;
        }
    }

    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.retain(|subscriber| !subscriber.is_closed());
        subscribers.len()
    }
}

impl LocationManagerClient for SimulatedLocationManager {
    fn delegate(&self) -> BoxStream<'static, DelegateEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(sender);
        stream::unfold(receiver, |mut receiver| async move {
            receiver.recv().await.map(|event| (event, receiver))
        })
        .boxed()
    }

    fn authorization_status(&self) -> AuthorizationStatus {
        *self.inner.authorization.lock()
    }

    fn request_when_in_use_authorization(&self) {
        let current = self.authorization_status();
        if current == AuthorizationStatus::NotDetermined {
            self.set_authorization(self.inner.grant);
        }
    }

    fn request_location(&self) {
        if !self.authorization_status().is_authorized() {
            self.emit(DelegateEvent::DidFailWithError(LocationError::Denied));
            return;
        }
        match self.position() {
            Some(location) => self.emit(DelegateEvent::DidUpdateLocations(vec![location])),
            None => self.emit(DelegateEvent::DidFailWithError(LocationError::LocationUnknown)),
        }
    }
}

use futures::stream::BoxStream;
use thiserror::Error;

use crate::geo::Location;

/// Authorization state of the location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedAlways,
    AuthorizedWhenInUse,
}

impl AuthorizationStatus {
    pub fn is_authorized(self) -> bool {
        matches!(self, Self::AuthorizedAlways | Self::AuthorizedWhenInUse)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location access denied")]
    Denied,
    #[error("location currently unknown")]
    LocationUnknown,
    #[error("location service failure: {0}")]
    Other(String),
}

/// Event reported by the location service to its delegate.
#[derive(Debug, Clone, PartialEq)]
pub enum DelegateEvent {
    DidChangeAuthorization(AuthorizationStatus),
    /// Fixes in chronological order; the last one is the most recent.
    DidUpdateLocations(Vec<Location>),
    DidFailWithError(LocationError),
}

/// Location service used by the map screen.
///
/// Requests are fire-and-forget: their outcome arrives on the delegate
/// stream. Every call to [`delegate`](Self::delegate) starts a fresh,
/// independent subscription.
pub trait LocationManagerClient: Send + Sync {
    fn delegate(&self) -> BoxStream<'static, DelegateEvent>;

    fn authorization_status(&self) -> AuthorizationStatus;

    fn request_when_in_use_authorization(&self);

    fn request_location(&self);
}

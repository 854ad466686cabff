//! Callback-style provider interface.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use super::error::{PlacesError, ProviderError};
use super::types::{AutocompleteFilter, PlacesResponse, RawPrediction, SessionToken};

/// Autocomplete backend that reports its outcome through a callback.
///
/// Implementations must eventually call [`CompletionHandler::complete`]
/// once, from any thread. Extra calls are ignored.
pub trait PlacesProvider: Send + Sync {
    fn find_autocomplete_predictions(
        &self,
        query: &str,
        filter: Option<&AutocompleteFilter>,
        session_token: &SessionToken,
        completion: CompletionHandler,
    );
}

type Outcome = Result<PlacesResponse, PlacesError>;

/// One-shot completion callback handed to a [`PlacesProvider`].
///
/// Cloneable so providers can move it into whatever callback machinery they
/// use; only the first `complete` call has an effect.
#[derive(Clone)]
pub struct CompletionHandler {
    slot: Arc<Mutex<Option<oneshot::Sender<Outcome>>>>,
}

impl CompletionHandler {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<Outcome>) {
        let (sender, receiver) = oneshot::channel();
        let handler = Self {
            slot: Arc::new(Mutex::new(Some(sender))),
        };
        (handler, receiver)
    }

    /// Report the provider outcome.
    ///
    /// An error wins over results. Malformed entries are dropped and the
    /// remaining predictions keep their order. Returns `false` when the
    /// handler had already completed.
    pub fn complete(
        &self,
        results: Option<Vec<RawPrediction>>,
        error: Option<ProviderError>,
    ) -> bool {
        let Some(sender) = self.slot.lock().take() else {
            tracing::trace!("places completion already delivered, ignoring");
            return false;
        };

        let outcome = match (results, error) {
            (_, Some(error)) => Err(PlacesError::Provider(error)),
            (Some(results), None) => Ok(PlacesResponse {
                predictions: results
                    .into_iter()
                    .filter_map(RawPrediction::into_prediction)
                    .collect(),
            }),
            (None, None) => Err(PlacesError::EmptyCallback),
        };

        if sender.send(outcome).is_err() {
            tracing::trace!("places completion dropped (caller gone)");
        }
        true
    }

    pub fn is_completed(&self) -> bool {
        self.slot.lock().is_none()
    }
}

//! Async facade over a callback-style [`PlacesProvider`].

use std::sync::Arc;

use super::error::PlacesError;
use super::provider::{CompletionHandler, PlacesProvider};
use super::types::{AutocompleteFilter, PlacesRequest, PlacesResponse, SessionToken};

/// Places autocomplete client.
///
/// Each call issues exactly one provider request and resolves exactly once.
/// All calls made through one client (and its clones) share a session token.
/// No retry, caching or debouncing happens here.
#[derive(Clone)]
pub struct GooglePlacesClient {
    provider: Arc<dyn PlacesProvider>,
    session_token: SessionToken,
    filter: Option<AutocompleteFilter>,
}

impl GooglePlacesClient {
    pub fn new(provider: Arc<dyn PlacesProvider>) -> Self {
        Self {
            provider,
            session_token: SessionToken::new(),
            filter: None,
        }
    }

    /// Use a caller-managed session token, e.g. one per search.
    pub fn with_session_token(mut self, session_token: SessionToken) -> Self {
        self.session_token = session_token;
        self
    }

    pub fn with_filter(mut self, filter: AutocompleteFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn session_token(&self) -> SessionToken {
        self.session_token
    }

    pub async fn autocomplete_predictions(
        &self,
        request: PlacesRequest,
    ) -> Result<PlacesResponse, PlacesError> {
        let (completion, receiver) = CompletionHandler::channel();
        self.provider.find_autocomplete_predictions(
            &request.query,
            self.filter.as_ref(),
            &self.session_token,
            completion,
        );

        match receiver.await {
            Ok(outcome) => outcome,
            Err(_) => Err(PlacesError::CallbackDropped),
        }
    }
}

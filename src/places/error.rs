//! Error types for the places client.

use thiserror::Error;

/// Failure reported by a places provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Request never produced a response (connect, timeout, TLS).
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Provider answered with a failure status.
    #[error("provider returned {status}: {message}")]
    Status { status: String, message: String },

    /// Response body could not be decoded.
    #[error("malformed provider response: {message}")]
    Decode { message: String },
}

/// Errors returned by [`GooglePlacesClient::autocomplete_predictions`](super::GooglePlacesClient::autocomplete_predictions).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacesError {
    #[error("places provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// Provider completed with neither results nor an error.
    #[error("places provider completed without results or error")]
    EmptyCallback,

    /// Provider released the completion handler without calling it.
    #[error("places provider dropped the completion handler")]
    CallbackDropped,
}

/// Errors building a provider from configuration.
#[derive(Debug, Error)]
pub enum ProviderSetupError {
    #[error("no Places API key configured (set GOOGLE_PLACES_API_KEY or places.api_key)")]
    MissingApiKey,

    #[error("invalid Places base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("places provider must be created inside a tokio runtime")]
    NoRuntime,
}

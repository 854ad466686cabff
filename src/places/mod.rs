//! Google Places autocomplete.
//!
//! Providers report results through a one-shot [`CompletionHandler`];
//! [`GooglePlacesClient`] turns that into a single `async` call.

mod bridge;
mod error;
mod google;
mod provider;
mod types;

pub use bridge::GooglePlacesClient;
pub use error::{PlacesError, ProviderError, ProviderSetupError};
pub use google::GooglePlacesHttpProvider;
pub use provider::{CompletionHandler, PlacesProvider};
pub use types::{
    AutocompleteFilter, AutocompletePrediction, PlacesRequest, PlacesResponse, RawPrediction,
    SessionToken, StyledText,
};

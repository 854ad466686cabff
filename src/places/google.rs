//! Places Autocomplete web API provider.

use std::ops::Range;
use std::time::Duration;

use serde::Deserialize;
use tokio::runtime::Handle;
use url::Url;

use super::error::{ProviderError, ProviderSetupError};
use super::provider::{CompletionHandler, PlacesProvider};
use super::types::{AutocompleteFilter, RawPrediction, SessionToken, StyledText};
use crate::config::PlacesConfig;

/// Calls `GET {base_url}/autocomplete/json` and reports through the
/// completion handler from a task on the runtime it was created in.
pub struct GooglePlacesHttpProvider {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    language: Option<String>,
    runtime: Handle,
}

#[derive(Debug, Deserialize)]
struct AutocompleteBody {
    status: String,
    #[serde(default)]
    predictions: Vec<WirePrediction>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WirePrediction {
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    matched_substrings: Vec<WireSubstring>,
}

#[derive(Debug, Deserialize)]
struct WireSubstring {
    offset: usize,
    length: usize,
}

impl WirePrediction {
    fn into_raw(self) -> RawPrediction {
        let matched = self.matched_substrings;
        RawPrediction {
            place_id: self.place_id,
            attributed_full_text: self.description.map(|text| {
                let highlights: Vec<_> = matched
                    .iter()
                    .filter_map(|m| char_span_to_bytes(&text, m.offset, m.length))
                    .collect();
                StyledText::new(text, highlights)
            }),
        }
    }
}

/// Byte range of `length` characters starting at character `offset`.
/// `None` when the span runs past the end of `text`.
fn char_span_to_bytes(text: &str, offset: usize, length: usize) -> Option<Range<usize>> {
    let mut boundaries = text
        .char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(text.len()));
    let start = boundaries.nth(offset)?;
    let end = match length {
        0 => start,
        _ => boundaries.nth(length - 1)?,
    };
    Some(start..end)
}

impl GooglePlacesHttpProvider {
    /// Build a provider from configuration. Must be called inside a tokio runtime.
    pub fn from_config(config: &PlacesConfig) -> Result<Self, ProviderSetupError> {
        let api_key = config
            .resolve_api_key()
            .ok_or(ProviderSetupError::MissingApiKey)?;

        let runtime = Handle::try_current().map_err(|_| ProviderSetupError::NoRuntime)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            http,
            endpoint: autocomplete_endpoint(&config.base_url)?,
            api_key,
            language: config.language.clone(),
            runtime,
        })
    }

    fn request_url(
        &self,
        query: &str,
        filter: Option<&AutocompleteFilter>,
        session_token: &SessionToken,
    ) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("input", query)
                .append_pair("key", &self.api_key)
                .append_pair("sessiontoken", &session_token.to_string());
            if let Some(language) = &self.language {
                pairs.append_pair("language", language);
            }
            if let Some(country) = filter.and_then(|f| f.country.as_deref()) {
                pairs.append_pair("components", &format!("country:{}", country.to_lowercase()));
            }
        }
        url
    }
}

impl PlacesProvider for GooglePlacesHttpProvider {
    fn find_autocomplete_predictions(
        &self,
        query: &str,
        filter: Option<&AutocompleteFilter>,
        session_token: &SessionToken,
        completion: CompletionHandler,
    ) {
        let url = self.request_url(query, filter, session_token);
        let http = self.http.clone();
        self.runtime.spawn(async move {
            match fetch_predictions(&http, url).await {
                Ok(predictions) => completion.complete(Some(predictions), None),
                Err(error) => completion.complete(None, Some(error)),
            };
        });
    }
}

fn autocomplete_endpoint(base_url: &str) -> Result<Url, ProviderSetupError> {
    let invalid = |source| ProviderSetupError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    };

    let mut base = Url::parse(base_url).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("autocomplete/json").map_err(invalid)
}

async fn fetch_predictions(
    http: &reqwest::Client,
    url: Url,
) -> Result<Vec<RawPrediction>, ProviderError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| ProviderError::Transport {
            message: e.without_url().to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16().to_string(),
            message,
        });
    }

    let body: AutocompleteBody = response.json().await.map_err(|e| ProviderError::Decode {
        message: e.without_url().to_string(),
    })?;

    match body.status.as_str() {
        "OK" | "ZERO_RESULTS" => {
            tracing::debug!(count = body.predictions.len(), "places autocomplete response");
            Ok(body
                .predictions
                .into_iter()
                .map(WirePrediction::into_raw)
                .collect())
        }
        _ => Err(ProviderError::Status {
            message: body.error_message.unwrap_or_default(),
            status: body.status,
        }),
    }
}

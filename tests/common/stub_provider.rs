//! In-memory places providers with scripted behavior.

#![allow(dead_code)]

use std::time::Duration;

use parking_lot::Mutex;

use taxi_map::places::{
    AutocompleteFilter, CompletionHandler, PlacesProvider, ProviderError, RawPrediction,
    SessionToken, StyledText,
};

/// What the stub does with each request.
#[derive(Clone)]
pub enum Behavior {
    /// Complete immediately with these entries.
    Results(Vec<RawPrediction>),
    /// Complete immediately with this error.
    Error(ProviderError),
    /// Complete with neither results nor error.
    Empty,
    /// Drop the handler without completing.
    Drop,
    /// Complete with results, then call again with an error.
    Twice(Vec<RawPrediction>),
    /// Echo the query back as a single prediction after `delay_per_char * query.len()`.
    EchoDelayed { delay_per_char: Duration },
    /// Keep the handler forever without completing.
    Hang,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub query: String,
    pub session_token: SessionToken,
    pub filter: Option<AutocompleteFilter>,
}

pub struct StubProvider {
    behavior: Behavior,
    calls: Mutex<Vec<Call>>,
    held: Mutex<Vec<CompletionHandler>>,
}

impl StubProvider {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
            held: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

pub fn entry(id: &str, text: &str) -> RawPrediction {
    RawPrediction::new(id, StyledText::plain(text))
}

impl PlacesProvider for StubProvider {
    fn find_autocomplete_predictions(
        &self,
        query: &str,
        filter: Option<&AutocompleteFilter>,
        session_token: &SessionToken,
        completion: CompletionHandler,
    ) {
        self.calls.lock().push(Call {
            query: query.to_string(),
            session_token: *session_token,
            filter: filter.cloned(),
        });

        match &self.behavior {
            Behavior::Results(results) => {
                completion.complete(Some(results.clone()), None);
            }
            Behavior::Error(error) => {
                completion.complete(None, Some(error.clone()));
            }
            Behavior::Empty => {
                completion.complete(None, None);
            }
            Behavior::Drop => drop(completion),
            Behavior::Twice(results) => {
                let late = completion.clone();
                completion.complete(Some(results.clone()), None);
                late.complete(
                    None,
                    Some(ProviderError::Transport {
                        message: "second callback".into(),
                    }),
                );
            }
            Behavior::EchoDelayed { delay_per_char } => {
                let delay = *delay_per_char * query.len() as u32;
                let query = query.to_string();
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    completion.complete(Some(vec![entry(&format!("id-{}", query), &query)]), None);
                });
            }
            Behavior::Hang => self.held.lock().push(completion),
        }
    }
}

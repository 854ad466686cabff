use std::fmt;
use std::ops::Range;

use uuid::Uuid;

/// Single autocomplete query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacesRequest {
    pub query: String,
}

impl PlacesRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Text with highlighted byte ranges, e.g. the part of a place name that
/// matched the query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    highlights: Vec<Range<usize>>,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlights: Vec::new(),
        }
    }

    /// Ranges that are empty, out of bounds or split a character are
    /// dropped; the rest are sorted and merged.
    pub fn new(text: impl Into<String>, highlights: impl IntoIterator<Item = Range<usize>>) -> Self {
        let text = text.into();
        let mut valid: Vec<Range<usize>> = highlights
            .into_iter()
            .filter(|range| {
                range.start < range.end
                    && range.end <= text.len()
                    && text.is_char_boundary(range.start)
                    && text.is_char_boundary(range.end)
            })
            .collect();
        valid.sort_by_key(|range| range.start);

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(valid.len());
        for range in valid {
            match merged.last_mut() {
                Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
                _ => merged.push(range),
            }
        }

        Self {
            text,
            highlights: merged,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlights(&self) -> &[Range<usize>] {
        &self.highlights
    }

    /// Split the text into consecutive `(segment, highlighted)` runs.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut segments = Vec::new();
        let mut cursor = 0;
        for range in &self.highlights {
            if cursor < range.start {
                segments.push((&self.text[cursor..range.start], false));
            }
            segments.push((&self.text[range.clone()], true));
            cursor = range.end;
        }
        if cursor < self.text.len() {
            segments.push((&self.text[cursor..], false));
        }
        segments
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompletePrediction {
    pub place_id: String,
    pub attributed_full_text: StyledText,
}

/// Predictions in the provider's ranking order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlacesResponse {
    pub predictions: Vec<AutocompletePrediction>,
}

impl PlacesResponse {
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

/// Entry as reported by a provider. Either field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPrediction {
    pub place_id: Option<String>,
    pub attributed_full_text: Option<StyledText>,
}

impl RawPrediction {
    pub fn new(place_id: impl Into<String>, text: StyledText) -> Self {
        Self {
            place_id: Some(place_id.into()),
            attributed_full_text: Some(text),
        }
    }

    /// `None` for malformed entries.
    pub fn into_prediction(self) -> Option<AutocompletePrediction> {
        let place_id = self.place_id.filter(|id| !id.is_empty())?;
        let attributed_full_text = self.attributed_full_text?;
        Some(AutocompletePrediction {
            place_id,
            attributed_full_text,
        })
    }
}

/// Groups the keystrokes of one search for provider-side billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Restricts autocomplete results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutocompleteFilter {
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
}

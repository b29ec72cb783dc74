use serde::Deserialize;

use super::FetchError;

/// One candidate returned by the suggestion service
///
/// Only `title` is read; any other fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub title: String,
}

impl Suggestion {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Parse a response body, keeping the service's ordering
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, FetchError> {
    serde_json::from_str::<Vec<Suggestion>>(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;

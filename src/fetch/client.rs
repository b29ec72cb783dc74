//! HTTP client for the suggestion service
//!
//! Issues `GET {base}/search?term={query}` and decodes the JSON array body.

use std::time::Duration;

use reqwest::Url;

use super::{FetchError, Suggestion, parse_suggestions};
use crate::error::SearchBarError;

const SEARCH_PATH: &str = "search";
const TERM_PARAM: &str = "term";

#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    search_url: Url,
}

impl SuggestClient {
    /// Create a client for the service rooted at `base_url`
    ///
    /// With `timeout_ms` unset the transport's default behavior applies.
    pub fn new(base_url: &str, timeout_ms: Option<u64>) -> Result<Self, SearchBarError> {
        let search_url = search_endpoint(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder
            .build()
            .map_err(|e| SearchBarError::HttpClient(e.to_string()))?;

        Ok(Self { http, search_url })
    }

    /// Full request URL for a term; the term is sent as typed, form-encoded
    pub fn request_url(&self, term: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair(TERM_PARAM, term);
        url
    }

    pub async fn fetch(&self, term: &str) -> Result<Vec<Suggestion>, FetchError> {
        let url = self.request_url(term);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_suggestions(&body)
    }
}

/// Resolve `{base}/search`, keeping any path prefix on the base URL
fn search_endpoint(base_url: &str) -> Result<Url, SearchBarError> {
    let invalid = || SearchBarError::InvalidServiceUrl(base_url.to_string());

    let mut base = Url::parse(base_url.trim()).map_err(|_| invalid())?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(invalid());
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(SEARCH_PATH).map_err(|_| invalid())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

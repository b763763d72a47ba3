//! Advice HTTP client
//!
//! Defines the AdviceSource seam, FetchError, and the reqwest-backed
//! client for the Advice Slip API.

use std::future::Future;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Default advice endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.adviceslip.com/advice";

/// Query parameter carrying the cache-busting value
const CACHE_BUSTER_PARAM: &str = "_";

/// Errors that can occur while fetching advice
///
/// Display output is what the widget shows as the fetch error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure (connection refused, DNS, TLS, body read)
    #[error("{0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Body is not JSON or lacks `slip.advice`
    #[error("{0}")]
    Malformed(String),

    /// The background worker is gone
    #[error("advice worker unavailable")]
    WorkerUnavailable,
}

/// Something that can produce one piece of advice per call
pub trait AdviceSource: Send + Sync + 'static {
    fn fetch(&self, cache_buster: u64) -> impl Future<Output = Result<String, FetchError>> + Send;
}

#[derive(Debug, Deserialize)]
struct SlipEnvelope {
    slip: Slip,
}

#[derive(Debug, Deserialize)]
struct Slip {
    advice: String,
}

/// Extract the advice text from a response body
///
/// Unknown fields such as `slip.id` are ignored.
pub fn parse_advice(body: &str) -> Result<String, FetchError> {
    serde_json::from_str::<SlipEnvelope>(body)
        .map(|envelope| envelope.slip.advice)
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Advice Slip API client
#[derive(Debug, Clone)]
pub struct AdviceClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AdviceClient {
    pub fn new(endpoint: Url) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("advisor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request URL for one fetch
    pub fn request_url(&self, cache_buster: u64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(CACHE_BUSTER_PARAM, &cache_buster.to_string());
        url
    }
}

impl AdviceSource for AdviceClient {
    async fn fetch(&self, cache_buster: u64) -> Result<String, FetchError> {
        let url = self.request_url(cache_buster);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // The API labels its JSON as text/html, so decode the raw body
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_advice(&body)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

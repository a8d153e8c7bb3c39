//! Outbound page fetching.
//!
//! The catalog only needs "GET this URL as text", so the HTTP client sits
//! behind [`DocsFetcher`] and tests can swap in an in-memory implementation.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("request failed with status {status} ({status_text})")]
    Status { status: u16, status_text: String },
    #[error("network error: {0}")]
    Network(String),
}

#[async_trait]
pub trait DocsFetcher {
    /// Fetch `url` and return its body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// [`DocsFetcher`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpDocsFetcher {
    client: reqwest::Client,
}

impl HttpDocsFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Client with this crate's user agent.
    pub fn with_default_client() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl DocsFetcher for HttpDocsFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

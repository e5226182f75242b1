//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - The `Fetcher` trait the crawl engine talks to
//! - Building a reqwest client with the configured user agent and timeouts
//! - Classifying transport failures

use crate::config::HttpConfig;
use crate::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// A fetched page
///
/// Non-2xx responses are still responses: the status is kept for the caller to inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,

    /// Page body content
    pub body: String,
}

impl FetchResponse {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking-per-call page source used by the crawler
///
/// Implementations return `Err` only when no response was received at all.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchResponse, TransportError>;
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed with reqwest's default policy.
///
/// # Example
///
/// ```
/// use sumi_seek::config::HttpConfig;
/// use sumi_seek::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `Fetcher` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify_error(url, e))?;

        Ok(FetchResponse { status, body })
    }
}

/// Maps a reqwest failure onto the transport error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        TransportError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        TransportError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}

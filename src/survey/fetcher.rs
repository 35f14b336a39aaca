//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the surveyor, including:
//! - Building an HTTP client with the configured user agent and timeout
//! - GET requests to fetch page content
//! - Fault classification for every way a fetch can fail
//!
//! A fetch has three distinguishable fault points, and each is reported as
//! its own [`FetchFault`] variant so callers can react to the class of
//! failure without matching on message text.

use crate::config::FetcherConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Classified fault from a single page fetch
#[derive(Debug, Clone, Error)]
pub enum FetchFault {
    /// The request could not be constructed (unparseable URL)
    #[error("failed to build request for {url}: {message}")]
    Construction { url: String, message: String },

    /// The request failed at the transport layer (DNS, connect, timeout, TLS)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// A response arrived but its body could not be read as text
    #[error("failed to read body from {url}: {message}")]
    BodyRead { url: String, message: String },
}

/// Builds the shared HTTP client from the fetcher configuration
///
/// The client applies the configured User-Agent to every request and bounds
/// the whole request/response cycle with the configured timeout. Redirects
/// follow the transport default policy; there are no retries.
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL and returns its body, or a classified fault
///
/// Non-success HTTP status codes are not faults: whatever body the server
/// returned is still handed to extraction. Every fault also emits a
/// diagnostic log line; log content is observability only and not part of
/// the contract.
///
/// The response is either fully consumed by the body read or dropped on the
/// error path, so the connection is released on every exit.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch, as supplied by the caller
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchFault> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Failed to build request for {}: {}", url, e);
            return Err(FetchFault::Construction {
                url: url.to_string(),
                message: e.to_string(),
            });
        }
    };

    let response = match client.get(parsed).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Request to {} failed: {}", url, e);
            return Err(FetchFault::Transport {
                url: url.to_string(),
                message: e.to_string(),
            });
        }
    };

    tracing::debug!("Fetched {} with status {}", url, response.status());

    match response.text().await {
        Ok(body) => Ok(body),
        Err(e) => {
            tracing::warn!("Failed to read body from {}: {}", url, e);
            Err(FetchFault::BodyRead {
                url: url.to_string(),
                message: e.to_string(),
            })
        }
    }
}

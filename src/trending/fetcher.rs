//! HTTP fetcher implementation
//!
//! This module handles the single GET request behind every listing:
//! - Building the HTTP client with the configured browser user agent
//! - Bounding each request by a timeout
//! - Classifying connection-level failures without raising them

use crate::config::HttpConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// A response arrived, whatever its status
    Response {
        /// HTTP status code
        status_code: u16,
        /// Response body
        body: String,
    },

    /// The request never completed (DNS, refused connection, timeout)
    ConnectionFailed {
        /// Error description
        error: String,
    },
}

impl FetchOutcome {
    /// Status code of the response, `None` when the connection failed
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response { status_code, .. } => Some(*status_code),
            Self::ConnectionFailed { .. } => None,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// Certificate verification is switched off here, per client, when
/// `accept_invalid_certs` is set.
///
/// # Example
///
/// ```no_run
/// use github_trending::config::HttpConfig;
/// use github_trending::trending::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once, without retries
///
/// Any status code is returned to the caller along with the body. Failures
/// before a status arrives, and failures reading the body, come back as
/// `ConnectionFailed`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `timeout` - Upper bound for the whole request
pub async fn fetch_page(client: &Client, url: &str, timeout: Duration) -> FetchOutcome {
    tracing::debug!("GET {}", url);

    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => return connection_failed(url, &e),
    };

    let status_code = response.status().as_u16();

    match response.text().await {
        Ok(body) => {
            tracing::debug!("{} answered {} ({} bytes)", url, status_code, body.len());
            FetchOutcome::Response { status_code, body }
        }
        Err(e) => connection_failed(url, &e),
    }
}

fn connection_failed(url: &str, e: &reqwest::Error) -> FetchOutcome {
    let error = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        "Connection refused".to_string()
    } else {
        e.to_string()
    };

    tracing::warn!("Fetching {} failed: {}", url, error);
    FetchOutcome::ConnectionFailed { error }
}

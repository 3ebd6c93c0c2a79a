//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for page content
//! - Error classification into fetch outcomes the crawl loop can consume
//!
//! There are no retries: a failed URL is logged by the caller and dropped,
//! its links simply never discovered.

use crate::config::CrawlerConfig;
use reqwest::Client;
use std::time::Duration;

/// Responses larger than this are dropped rather than parsed
const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// Result of a fetch operation
///
/// Every failure mode is a value, not an error: the crawl loop handles each
/// variant locally and continues with the next URL.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched an HTML page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Content-Type header value
        content_type: String,
        /// Page body
        body: String,
    },

    /// Page is not HTML; not parsed, not counted as an error
    ContentMismatch {
        /// The actual Content-Type received
        content_type: String,
    },

    /// Non-2xx HTTP status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network-level failure (timeout, connection refused, oversized body)
    NetworkError {
        /// Error description
        error: String,
        /// Whether the failure was a timeout
        timeout: bool,
    },
}

impl FetchOutcome {
    /// Short human-readable reason for a failed fetch, None on success
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            FetchOutcome::Success { .. } => None,
            FetchOutcome::ContentMismatch { content_type } => {
                Some(format!("non-HTML content type: {}", content_type))
            }
            FetchOutcome::HttpError { status_code } => Some(format!("HTTP {}", status_code)),
            FetchOutcome::NetworkError { error, .. } => Some(error.clone()),
        }
    }
}

/// Builds the HTTP client used for the whole crawl
///
/// The client follows redirects (reqwest's default policy); the final URL
/// after redirects is reported in [`FetchOutcome::Success`] so links can be
/// resolved against the page that actually answered.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the result
///
/// # Outcome mapping
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | 2xx with HTML content type | Success |
/// | 2xx with other content type | ContentMismatch |
/// | non-2xx status | HttpError |
/// | timeout / connect failure | NetworkError (timeout flag set for timeouts) |
/// | body over 10 MiB | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            return FetchOutcome::NetworkError {
                error: classify_request_error(&e),
                timeout: e.is_timeout(),
            }
        }
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchOutcome::HttpError {
            status_code: status.as_u16(),
        };
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    // An absent Content-Type is tolerated; anything explicitly non-HTML is not
    if !content_type.is_empty() && !content_type.contains("text/html") {
        return FetchOutcome::ContentMismatch { content_type };
    }

    if let Some(length) = response.content_length() {
        if length > MAX_BODY_BYTES {
            return FetchOutcome::NetworkError {
                error: format!("response too large: {} bytes", length),
                timeout: false,
            };
        }
    }

    match response.text().await {
        Ok(body) if body.len() as u64 > MAX_BODY_BYTES => FetchOutcome::NetworkError {
            error: format!("response too large: {} bytes", body.len()),
            timeout: false,
        },
        Ok(body) => FetchOutcome::Success {
            final_url,
            status_code: status.as_u16(),
            content_type,
            body,
        },
        Err(e) => FetchOutcome::NetworkError {
            error: format!("failed to read body: {}", e),
            timeout: e.is_timeout(),
        },
    }
}

fn classify_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timeout".to_string()
    } else if e.is_connect() {
        "connection failed".to_string()
    } else {
        e.to_string()
    }
}

//! Moissonneur: a single-site month-link harvester
//!
//! This crate implements a breadth-first crawler that walks every same-domain
//! page reachable from a start URL, classifies each discovered link against a
//! fixed set of French month keywords, and produces a per-month report.

pub mod config;
pub mod crawler;
pub mod months;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for Moissonneur operations
///
/// Per-URL fetch and parse failures never appear here: the crawl loop consumes
/// them locally and keeps going. Only conditions that make the whole crawl
/// impossible are surfaced.
#[derive(Debug, Error)]
pub enum MoissonneurError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid start URL '{url}': {reason}")]
    InvalidStartUrl { url: String, reason: String },

    #[error("Start URL {url} is unreachable: {reason}")]
    StartUnreachable { url: String, reason: String },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for Moissonneur operations
pub type Result<T> = std::result::Result<T, MoissonneurError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlOutcome, Crawler};
pub use months::{classify, Month};
pub use url::{extract_host, normalize_url};

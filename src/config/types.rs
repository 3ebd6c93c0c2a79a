use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Moissonneur
///
/// Every field has a default, so a config file is optional; CLI flags override
/// whatever the file provides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Politeness delay slept after each request (milliseconds)
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of pages to attempt before stopping (0 = unlimited)
    ///
    /// Safety bound against sites that generate unbounded distinct URLs
    /// (calendars, faceted search). Failed fetches count against the bound
    /// too; it caps requests issued, not successes.
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Path to write the report to; stdout only when absent
    #[serde(rename = "report-path")]
    pub report_path: Option<PathBuf>,

    /// Report format
    #[serde(default)]
    pub format: ReportFormat,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text summary plus a sorted flat link list when written to a file
    #[default]
    Text,
    /// Markdown summary with per-month sections
    Markdown,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_pages() -> u64 {
    500
}

fn default_user_agent() -> String {
    // Browser-style UA; some sites refuse obvious bots outright
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            timeout_secs: default_timeout_secs(),
            max_pages: default_max_pages(),
            user_agent: default_user_agent(),
        }
    }
}

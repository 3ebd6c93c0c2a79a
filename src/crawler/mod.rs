//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with outcome classification
//! - HTML parsing and anchor extraction
//! - The frontier (FIFO work queue + visited set)
//! - The breadth-first crawl loop with month classification

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawlOutcome, Crawler, LinkRecord, MonthIndex};
pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use frontier::{should_visit, Frontier, VisitedSet};
pub use parser::{parse_page, Anchor, ParsedPage};

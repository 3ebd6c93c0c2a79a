//! Report model derived from a finished crawl
//!
//! The report is computed purely from the crawl outcome (month index plus
//! counters); there is no hidden state, so re-deriving it from the same
//! outcome always yields the same report.

use crate::crawler::{CrawlOutcome, LinkRecord};
use crate::months::Month;
use chrono::{DateTime, Utc};

/// All links recorded under one month
#[derive(Debug, Clone)]
pub struct MonthSection {
    pub month: Month,
    pub links: Vec<LinkRecord>,
}

/// Human-readable crawl summary
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub generated_at: DateTime<Utc>,
    pub start_url: String,
    pub host: String,
    pub pages_fetched: u64,
    pub fetch_errors: u64,
    pub links_seen: u64,
    pub total_matches: usize,
    pub cancelled: bool,
    pub page_limit_hit: bool,

    /// One section per recognized month, in calendar order, empty months
    /// included
    pub months: Vec<MonthSection>,
}

/// Builds a report from a crawl outcome
pub fn build_report(outcome: CrawlOutcome) -> CrawlReport {
    let total_matches = outcome.total_matches();

    let mut index = outcome.index;
    let months = Month::ALL
        .iter()
        .map(|&month| MonthSection {
            month,
            links: index.remove(&month).unwrap_or_default(),
        })
        .collect();

    CrawlReport {
        generated_at: Utc::now(),
        start_url: outcome.start_url,
        host: outcome.host,
        pages_fetched: outcome.pages_fetched,
        fetch_errors: outcome.fetch_errors,
        links_seen: outcome.links_seen,
        total_matches,
        cancelled: outcome.cancelled,
        page_limit_hit: outcome.page_limit_hit,
        months,
    }
}

/// Flat, sorted, de-duplicated list of every matching URL
pub fn sorted_link_list(report: &CrawlReport) -> Vec<String> {
    let mut urls: Vec<String> = report
        .months
        .iter()
        .flat_map(|section| section.links.iter().map(|link| link.url.clone()))
        .collect();
    urls.sort();
    urls.dedup();
    urls
}

//! Crawler coordinator - main crawl loop
//!
//! Owns the crawl state (visited set, frontier, month index, host
//! restriction) and drives the breadth-first traversal: pop a URL, fetch it,
//! extract anchors, classify them against the month keywords, enqueue unseen
//! same-domain links, repeat until the frontier drains.
//!
//! Fetch and parse failures are per-URL and non-fatal; the crawl degrades
//! gracefully around them. The one hard failure is the very first fetch: if
//! the start URL itself cannot be fetched, no traversal is possible at all.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::frontier::{should_visit, Frontier, VisitedSet};
use crate::crawler::parser::parse_page;
use crate::months::{classify, Month};
use crate::url::{extract_host, normalize_url, same_host};
use crate::{MoissonneurError, Result};
use reqwest::Client;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// One discovered anchor that matched a month keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Normalized absolute URL of the link target
    pub url: String,

    /// The anchor's visible text
    pub text: String,

    /// URL of the page the anchor was found on
    pub source: String,
}

/// Mapping from month to the links that matched it, in discovery order
///
/// Grows monotonically during the crawl and is read-only afterwards. A link
/// matching several months appears under each of them.
pub type MonthIndex = BTreeMap<Month, Vec<LinkRecord>>;

/// Everything a finished (or interrupted) crawl produced
#[derive(Debug)]
pub struct CrawlOutcome {
    /// The normalized start URL
    pub start_url: String,

    /// The host every followed link was restricted to
    pub host: String,

    /// Per-month matching links
    pub index: MonthIndex,

    /// Pages successfully fetched
    pub pages_fetched: u64,

    /// Fetches that failed (HTTP errors, network errors)
    pub fetch_errors: u64,

    /// Same-domain anchors inspected
    pub links_seen: u64,

    /// Whether the crawl was cancelled before the frontier drained
    pub cancelled: bool,

    /// Whether the max-pages safety bound stopped the crawl
    pub page_limit_hit: bool,
}

impl CrawlOutcome {
    /// Total number of month matches across all months
    pub fn total_matches(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }
}

/// Internal crawl state, owned exclusively by the crawl loop
struct CrawlState {
    host: String,
    visited: VisitedSet,
    frontier: Frontier,
    index: MonthIndex,
    pages_fetched: u64,
    fetch_errors: u64,
    links_seen: u64,
}

/// Single-site month-link crawler
pub struct Crawler {
    config: Config,
    client: Client,
    cancel: Arc<AtomicBool>,
}

impl Crawler {
    /// Creates a crawler with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.crawler)?;
        Ok(Self {
            config,
            client,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle that can cancel the crawl from another task
    ///
    /// The flag is checked between frontier iterations; a cancelled crawl
    /// returns the partial month index rather than discarding it. [`run`]
    /// clears the flag at entry, so a crawler can be reused after a
    /// cancelled run.
    ///
    /// [`run`]: Crawler::run
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Crawls from the start URL until the frontier is empty
    ///
    /// # Errors
    ///
    /// * [`MoissonneurError::InvalidStartUrl`] - the start URL does not parse
    ///   as an absolute http(s) URL
    /// * [`MoissonneurError::StartUnreachable`] - the very first fetch failed
    pub async fn run(&self, start_url: &str) -> Result<CrawlOutcome> {
        let start = normalize_url(start_url).map_err(|e| MoissonneurError::InvalidStartUrl {
            url: start_url.to_string(),
            reason: e.to_string(),
        })?;

        let host = extract_host(&start).ok_or_else(|| MoissonneurError::InvalidStartUrl {
            url: start_url.to_string(),
            reason: "URL has no host".to_string(),
        })?;

        tracing::info!("Starting crawl of {} (host restriction: {})", start, host);

        // A flag left over from an earlier cancelled run must not stop this one
        self.cancel.store(false, Ordering::Relaxed);

        let mut state = CrawlState {
            host,
            visited: VisitedSet::new(),
            frontier: Frontier::new(),
            index: MonthIndex::new(),
            pages_fetched: 0,
            fetch_errors: 0,
            links_seen: 0,
        };
        state.frontier.push(start.clone());

        let delay = Duration::from_millis(self.config.crawler.delay_ms);
        let max_pages = self.config.crawler.max_pages;
        let mut cancelled = false;
        let mut page_limit_hit = false;

        while let Some(url) = {
            if self.cancel.load(Ordering::Relaxed) {
                cancelled = true;
                tracing::warn!(
                    "Crawl cancelled with {} URLs still queued; reporting partial results",
                    state.frontier.len()
                );
                None
            } else if max_pages > 0 && state.visited.len() as u64 >= max_pages {
                page_limit_hit = true;
                tracing::warn!(
                    "Reached max-pages bound of {}, stopping with {} URLs still queued",
                    max_pages,
                    state.frontier.len()
                );
                None
            } else {
                state.frontier.pop()
            }
        } {
            if !state.visited.insert(&url) {
                continue;
            }

            let first_fetch = state.visited.len() == 1;
            let outcome = fetch_url(&self.client, url.as_str()).await;

            match outcome {
                FetchOutcome::Success {
                    final_url, body, ..
                } => {
                    state.pages_fetched += 1;
                    self.process_page(&mut state, &url, &final_url, &body);
                }
                failure => {
                    let reason = failure
                        .failure_reason()
                        .unwrap_or_else(|| "unknown".to_string());

                    if let FetchOutcome::ContentMismatch { .. } = failure {
                        // Reachable, just not a page we can extract links from
                        state.pages_fetched += 1;
                        tracing::debug!("Skipping {}: {}", url, reason);
                    } else {
                        state.fetch_errors += 1;
                        tracing::warn!("Fetch failed for {}: {}", url, reason);

                        if first_fetch {
                            return Err(MoissonneurError::StartUnreachable {
                                url: url.to_string(),
                                reason,
                            });
                        }
                    }
                }
            }

            // Politeness throttle: bound the request rate, even after failures
            if !delay.is_zero() && !state.frontier.is_empty() {
                tokio::time::sleep(delay).await;
            }

            if state.visited.len() % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages visited, {} queued, {} matches",
                    state.visited.len(),
                    state.frontier.len(),
                    state.index.values().map(Vec::len).sum::<usize>()
                );
            }
        }

        tracing::info!(
            "Crawl finished: {} pages fetched, {} fetch errors, {} month matches",
            state.pages_fetched,
            state.fetch_errors,
            state.index.values().map(Vec::len).sum::<usize>()
        );

        Ok(CrawlOutcome {
            start_url: start.to_string(),
            host: state.host,
            index: state.index,
            pages_fetched: state.pages_fetched,
            fetch_errors: state.fetch_errors,
            links_seen: state.links_seen,
            cancelled,
            page_limit_hit,
        })
    }

    /// Extracts, classifies, and enqueues the links of one fetched page
    fn process_page(&self, state: &mut CrawlState, url: &Url, final_url: &str, body: &str) {
        // Resolve hrefs against the URL that actually answered, so links on a
        // redirected page land where the server intended
        let base = Url::parse(final_url).unwrap_or_else(|_| url.clone());

        let parsed = parse_page(body, &base);
        if let Some(title) = &parsed.title {
            tracing::debug!("Visited {} ({})", url, title);
        }

        for anchor in parsed.anchors {
            let link = match normalize_url(anchor.url.as_str()) {
                Ok(n) => n,
                Err(e) => {
                    tracing::debug!("Dropping unnormalizable link {}: {}", anchor.url, e);
                    continue;
                }
            };

            // Out-of-domain links are never followed and never classified
            if !same_host(&link, &state.host) {
                continue;
            }

            state.links_seen += 1;

            for month in classify(&anchor.text, &link) {
                tracing::info!("Match [{}] {} ({})", month, link, anchor.text);
                state.index.entry(month).or_default().push(LinkRecord {
                    url: link.to_string(),
                    text: anchor.text.clone(),
                    source: url.to_string(),
                });
            }

            // Matched or not, unseen pages are still traversed: a month page
            // may link to further relevant pages
            if should_visit(&link) && !state.visited.contains(&link) {
                state.frontier.push(link);
            }
        }
    }
}

//! Crawl frontier: FIFO work queue plus visited set
//!
//! The traversal is breadth-first over an explicit queue rather than
//! recursion, so call depth stays flat on large sites. Two invariants live
//! here:
//! - a URL enters the visited set at most once, and
//! - a URL is never pending in the queue twice (membership is checked at
//!   enqueue time, not only at fetch time).

use std::collections::{HashSet, VecDeque};
use url::Url;

/// File extensions that are never worth fetching for link extraction
const EXCLUDED_EXTENSIONS: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".zip", ".doc", ".docx", ".xls", ".xlsx", ".ppt",
    ".pptx", ".mp4", ".avi", ".mov", ".mp3", ".wav",
];

/// Set of normalized URLs that have already been handed to the fetcher
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL visited. Returns false if it was already visited.
    pub fn insert(&mut self, url: &Url) -> bool {
        self.urls.insert(url.as_str().to_string())
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

/// FIFO queue of URLs pending fetch
///
/// Keeps a parallel membership set so the same URL cannot be queued twice.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
    pending: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a URL unless it is already pending. Returns whether it was added.
    pub fn push(&mut self, url: Url) -> bool {
        if self.pending.insert(url.as_str().to_string()) {
            self.queue.push_back(url);
            true
        } else {
            false
        }
    }

    /// Pops the next URL in discovery order
    pub fn pop(&mut self) -> Option<Url> {
        let url = self.queue.pop_front()?;
        self.pending.remove(url.as_str());
        Some(url)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Decides whether a same-domain URL is worth visiting
///
/// Skips URLs pointing at binary or document files; they carry no anchors.
pub fn should_visit(url: &Url) -> bool {
    let path_lower = url.path().to_lowercase();
    !EXCLUDED_EXTENSIONS
        .iter()
        .any(|ext| path_lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_visited_insert_once() {
        let mut visited = VisitedSet::new();
        assert!(visited.insert(&url("https://example.com/a")));
        assert!(!visited.insert(&url("https://example.com/a")));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_frontier_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.push(url("https://example.com/a"));
        frontier.push(url("https://example.com/b"));
        frontier.push(url("https://example.com/c"));

        assert_eq!(frontier.pop().unwrap().as_str(), "https://example.com/a");
        assert_eq!(frontier.pop().unwrap().as_str(), "https://example.com/b");
        assert_eq!(frontier.pop().unwrap().as_str(), "https://example.com/c");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_frontier_rejects_duplicates() {
        let mut frontier = Frontier::new();
        assert!(frontier.push(url("https://example.com/a")));
        assert!(!frontier.push(url("https://example.com/a")));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_frontier_membership_cleared_on_pop() {
        let mut frontier = Frontier::new();
        let u = url("https://example.com/a");
        assert!(frontier.push(u.clone()));
        assert!(!frontier.push(u.clone()));

        frontier.pop();
        // Re-queueing after pop is allowed; the visited set is what prevents refetching
        assert!(frontier.push(u));
    }

    #[test]
    fn test_should_visit_html_page() {
        assert!(should_visit(&url("https://example.com/archives/novembre")));
    }

    #[test]
    fn test_should_not_visit_binary_files() {
        assert!(!should_visit(&url("https://example.com/rapport.pdf")));
        assert!(!should_visit(&url("https://example.com/photo.JPG")));
        assert!(!should_visit(&url("https://example.com/pack.zip")));
    }

    #[test]
    fn test_should_visit_ignores_query() {
        assert!(should_visit(&url("https://example.com/page?file=rapport.pdf")));
    }
}

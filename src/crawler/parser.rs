//! HTML parser for extracting anchors
//!
//! This module parses HTML content and extracts every anchor together with
//! its visible text; classification needs both. Malformed HTML never fails:
//! scraper is lenient, and a page without usable anchors just yields an
//! empty list.

use scraper::{Html, Selector};
use url::Url;

/// A discovered anchor: resolved absolute URL plus visible text
#[derive(Debug, Clone)]
pub struct Anchor {
    /// Absolute URL after resolving the href against the page URL
    pub url: Url,

    /// The anchor's trimmed visible text (may be empty for image links)
    pub text: String,
}

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from the <title> tag)
    pub title: Option<String>,

    /// All anchors found on the page
    pub anchors: Vec<Anchor>,
}

/// Parses HTML content and extracts anchors and metadata
///
/// # Link Extraction Rules
///
/// **Excluded:**
/// - `javascript:`, `mailto:`, `tel:`, `data:` hrefs
/// - Fragment-only hrefs (`#section`)
/// - Empty hrefs and hrefs that fail to resolve against the page URL
/// - Non-http(s) schemes after resolution
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The page URL, used to resolve relative hrefs
pub fn parse_page(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        anchors: extract_anchors(&document, base_url),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts all valid anchors from the HTML document
fn extract_anchors(document: &Html, base_url: &Url) -> Vec<Anchor> {
    let mut anchors = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            if let Some(url) = resolve_href(href, base_url) {
                let text = element
                    .text()
                    .collect::<String>()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ");

                anchors.push(Anchor { url, text });
            }
        }
    }

    anchors
}

/// Resolves an href to an absolute URL, or None if it should be excluded
fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Same-page anchors
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute)
        }
        _ => None,
    }
}

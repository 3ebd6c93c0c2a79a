//! Month keyword classification
//!
//! This module defines the five recognized months and the logic that decides
//! which of them a discovered link mentions. A link matches a month when the
//! anchor text or the URL contains one of the month's name variants
//! (case-insensitive), or when the URL carries a numeric date segment such as
//! `/2023/11/` or `2023-11-` for that month's number.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use url::Url;

/// The five recognized months
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Janvier,
    Fevrier,
    Mars,
    Novembre,
    Decembre,
}

impl Month {
    /// All recognized months, in calendar order
    pub const ALL: [Month; 5] = [
        Month::Janvier,
        Month::Fevrier,
        Month::Mars,
        Month::Novembre,
        Month::Decembre,
    ];

    /// Name variants that count as a mention of this month
    ///
    /// Accented French, unaccented French, and English forms. All lowercase;
    /// match against lowercased input.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Month::Janvier => &["janvier", "january"],
            Month::Fevrier => &["février", "fevrier", "february"],
            Month::Mars => &["mars", "march"],
            Month::Novembre => &["novembre", "november"],
            Month::Decembre => &["décembre", "decembre", "december"],
        }
    }

    /// Calendar number of this month (1-12)
    pub fn number(&self) -> u32 {
        match self {
            Month::Janvier => 1,
            Month::Fevrier => 2,
            Month::Mars => 3,
            Month::Novembre => 11,
            Month::Decembre => 12,
        }
    }

    /// Looks up a recognized month by its calendar number
    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| m.number() == n)
    }

    fn mentioned_in(&self, haystack_lower: &str) -> bool {
        self.keywords().iter().any(|kw| haystack_lower.contains(kw))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Month::Janvier => "Janvier",
            Month::Fevrier => "Février",
            Month::Mars => "Mars",
            Month::Novembre => "Novembre",
            Month::Decembre => "Décembre",
        };
        f.write_str(name)
    }
}

/// Matches date segments like `/2023/11/`, `/2024-03-`, or `2023/1/` in a URL.
/// The month group only admits the recognized month numbers. The segment may
/// also end the URL: normalization trims trailing slashes, so a month-archive
/// index like `/2023/11/` arrives here as `/2023/11`.
fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{4})[/-](0?[1-3]|11|12)([/-]|$)").unwrap())
}

/// Extracts recognized months from numeric date segments in a URL
fn months_from_date_segments(url_str: &str) -> Vec<Month> {
    date_pattern()
        .captures_iter(url_str)
        .filter_map(|caps| caps.get(2))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .filter_map(Month::from_number)
        .collect()
}

/// Classifies a link against all recognized months
///
/// Inspects both the anchor's visible text and the URL (case-insensitive).
/// Returns every month that matches, each at most once, in calendar order.
/// A link mentioning two months is reported under both; reports are additive
/// statistics, not a partition.
///
/// # Examples
///
/// ```
/// use moissonneur::months::{classify, Month};
/// use url::Url;
///
/// let url = Url::parse("https://example.com/docs/nov.html").unwrap();
/// let months = classify("Rapport Novembre 2023", &url);
/// assert_eq!(months, vec![Month::Novembre]);
/// ```
pub fn classify(text: &str, url: &Url) -> Vec<Month> {
    let text_lower = text.to_lowercase();
    let url_lower = url.as_str().to_lowercase();

    let date_months = months_from_date_segments(&url_lower);

    Month::ALL
        .iter()
        .copied()
        .filter(|month| {
            month.mentioned_in(&text_lower)
                || month.mentioned_in(&url_lower)
                || date_months.contains(month)
        })
        .collect()
}

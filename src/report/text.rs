//! Plain-text report rendering

use crate::report::stats::{sorted_link_list, CrawlReport};
use std::io::Write;
use std::path::Path;

/// Prints the report to stdout in a formatted manner
pub fn print_report(report: &CrawlReport) {
    println!("=== Month Link Report ===\n");

    println!("Crawl of {} (host: {})", report.start_url, report.host);
    println!("  Pages fetched: {}", report.pages_fetched);
    println!("  Fetch errors: {}", report.fetch_errors);
    println!("  Same-domain links inspected: {}", report.links_seen);
    println!("  Month matches: {}", report.total_matches);
    if report.cancelled {
        println!("  Note: crawl was cancelled; results are partial");
    }
    if report.page_limit_hit {
        println!("  Note: max-pages bound reached; results are partial");
    }
    println!();

    for section in &report.months {
        println!("{}: {} links", section.month, section.links.len());
        for link in &section.links {
            if link.text.is_empty() {
                println!("  - {}", link.url);
            } else {
                println!("  - {} ({})", link.url, link.text);
            }
        }
    }
}

/// Writes the flat sorted list of matching URLs, one per line
pub fn write_link_list(report: &CrawlReport, path: &Path) -> std::io::Result<usize> {
    let urls = sorted_link_list(report);

    let mut file = std::fs::File::create(path)?;
    for url in &urls {
        writeln!(file, "{}", url)?;
    }

    Ok(urls.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::{CrawlOutcome, LinkRecord, MonthIndex};
    use crate::months::Month;
    use crate::report::stats::build_report;
    use tempfile::tempdir;

    fn sample_report() -> CrawlReport {
        let mut index = MonthIndex::new();
        index.entry(Month::Novembre).or_default().push(LinkRecord {
            url: "https://example.com/b-novembre".to_string(),
            text: "Rapport Novembre".to_string(),
            source: "https://example.com/".to_string(),
        });
        index.entry(Month::Novembre).or_default().push(LinkRecord {
            url: "https://example.com/a-novembre".to_string(),
            text: "Bilan Novembre".to_string(),
            source: "https://example.com/".to_string(),
        });

        build_report(CrawlOutcome {
            start_url: "https://example.com/".to_string(),
            host: "example.com".to_string(),
            index,
            pages_fetched: 2,
            fetch_errors: 0,
            links_seen: 5,
            cancelled: false,
            page_limit_hit: false,
        })
    }

    #[test]
    fn test_write_link_list_sorted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("liens.txt");

        let count = write_link_list(&sample_report(), &path).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "https://example.com/a-novembre\nhttps://example.com/b-novembre\n"
        );
    }

    #[test]
    fn test_write_link_list_empty_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("liens.txt");

        let report = build_report(CrawlOutcome {
            start_url: "https://example.com/".to_string(),
            host: "example.com".to_string(),
            index: MonthIndex::new(),
            pages_fetched: 1,
            fetch_errors: 0,
            links_seen: 0,
            cancelled: false,
            page_limit_hit: false,
        });

        let count = write_link_list(&report, &path).unwrap();
        assert_eq!(count, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}

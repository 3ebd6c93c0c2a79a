//! Markdown report rendering

use crate::report::stats::CrawlReport;
use std::path::Path;

/// Renders the report as a markdown document
pub fn render_markdown(report: &CrawlReport) -> String {
    let mut out = String::new();

    out.push_str("# Month Link Report\n\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push_str("## Overview\n\n");
    out.push_str(&format!("- Start URL: {}\n", report.start_url));
    out.push_str(&format!("- Host: {}\n", report.host));
    out.push_str(&format!("- Pages fetched: {}\n", report.pages_fetched));
    out.push_str(&format!("- Fetch errors: {}\n", report.fetch_errors));
    out.push_str(&format!(
        "- Same-domain links inspected: {}\n",
        report.links_seen
    ));
    out.push_str(&format!("- Month matches: {}\n", report.total_matches));
    if report.cancelled {
        out.push_str("- **Crawl was cancelled; results are partial**\n");
    }
    if report.page_limit_hit {
        out.push_str("- **Max-pages bound reached; results are partial**\n");
    }
    out.push('\n');

    for section in &report.months {
        out.push_str(&format!(
            "## {} ({})\n\n",
            section.month,
            section.links.len()
        ));

        if section.links.is_empty() {
            out.push_str("_No matching links._\n\n");
            continue;
        }

        for link in &section.links {
            let text = if link.text.is_empty() {
                "(no text)"
            } else {
                &link.text
            };
            out.push_str(&format!("- [{}]({})\n", text, link.url));
        }
        out.push('\n');
    }

    out
}

/// Writes the markdown report to a file
pub fn write_markdown(report: &CrawlReport, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, render_markdown(report))
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
        index.entry(Month::Decembre).or_default().push(LinkRecord {
            url: "https://example.com/decembre".to_string(),
            text: "Bilan Décembre".to_string(),
            source: "https://example.com/".to_string(),
        });

        build_report(CrawlOutcome {
            start_url: "https://example.com/".to_string(),
            host: "example.com".to_string(),
            index,
            pages_fetched: 4,
            fetch_errors: 1,
            links_seen: 9,
            cancelled: false,
            page_limit_hit: false,
        })
    }

    #[test]
    fn test_render_contains_all_month_headers() {
        let md = render_markdown(&sample_report());
        assert!(md.contains("## Janvier (0)"));
        assert!(md.contains("## Février (0)"));
        assert!(md.contains("## Mars (0)"));
        assert!(md.contains("## Novembre (0)"));
        assert!(md.contains("## Décembre (1)"));
    }

    #[test]
    fn test_render_links_as_markdown() {
        let md = render_markdown(&sample_report());
        assert!(md.contains("- [Bilan Décembre](https://example.com/decembre)"));
    }

    #[test]
    fn test_render_empty_months_marked() {
        let md = render_markdown(&sample_report());
        assert!(md.contains("_No matching links._"));
    }

    #[test]
    fn test_write_markdown_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.md");

        write_markdown(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Month Link Report"));
        assert!(content.contains("- Pages fetched: 4"));
    }
}

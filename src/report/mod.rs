//! Output module for crawl reports
//!
//! The report is derived purely from the final month index and crawl
//! counters. Renderers: plain text to stdout, a flat sorted link list, and a
//! markdown document.

mod markdown;
pub mod stats;
mod text;

pub use markdown::{render_markdown, write_markdown};
pub use stats::{build_report, sorted_link_list, CrawlReport, MonthSection};
pub use text::{print_report, write_link_list};

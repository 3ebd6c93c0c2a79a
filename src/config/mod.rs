//! Configuration module
//!
//! Configuration comes from an optional TOML file merged with CLI flags.
//! Every setting has a default, so `moissonneur <url>` alone is a valid
//! invocation.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, ReportFormat};
pub use validation::validate;

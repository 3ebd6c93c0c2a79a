//! URL handling module
//!
//! Provides URL normalization (so the visited set recognizes two spellings of
//! the same page) and the same-host restriction check.

mod domain;
mod normalize;

pub use domain::{extract_host, same_host};
pub use normalize::normalize_url;

//! Utility functions.
//!
//! This module provides:
//! - Absolute URL validation shared by the extractor and the fetch façade
//! - Regex compilation helpers

mod pattern;
mod url;

pub use self::pattern::compile_regex;
pub use self::url::parse_absolute_url;

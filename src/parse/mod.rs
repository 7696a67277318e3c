//! HTML parsing and Open Graph extraction.
//!
//! This module extracts the five core Open Graph properties from HTML text:
//! - `og:title`, `og:type`, `og:description` (verbatim text)
//! - `og:url`, `og:image` (absolute URLs; invalid values are dropped)
//!
//! Matching is done with a regular expression over the raw text via the
//! `regex` crate. No document tree is built.

mod extract;
mod metadata;
mod property;

// Re-export public API
pub use extract::{declarations, extract, Declaration};
pub use metadata::{OpenGraph, OpenGraphBuilder};
pub use property::OgProperty;

//! Error handling.
//!
//! This module provides:
//! - The flat `OpenGraphError` returned by extraction and fetching
//! - `InitializationError` for logger and HTTP client setup
//!
//! Hard failures (bad input URL, transport errors, undecodable bodies) are
//! errors; a malformed value inside a single `og:url` or `og:image`
//! declaration is not, and never reaches this module.

mod types;

// Re-export public API
pub use types::{InitializationError, OpenGraphError};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OpenGraphError>;

//! opengraph library: Open Graph metadata extraction
//!
//! This library extracts the five core Open Graph properties (`og:title`,
//! `og:type`, `og:url`, `og:image`, `og:description`) from HTML text, and can
//! fetch a page over HTTP first.
//!
//! # Example
//!
//! ```
//! let html = r#"<head>
//!   <meta property="og:title" content="Test Title">
//!   <meta property="og:url" content="https://example.com">
//! </head>"#;
//!
//! let og = opengraph::parse_html(html)?;
//! assert_eq!(og.title(), Some("Test Title"));
//! assert_eq!(og.url().map(|u| u.as_str()), Some("https://example.com/"));
//! assert_eq!(og.description(), None);
//! # Ok::<(), opengraph::OpenGraphError>(())
//! ```
//!
//! Fetching requires a Tokio runtime:
//!
//! ```no_run
//! use opengraph::{Config, OpenGraphClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenGraphClient::new(&Config::default())?;
//! let og = client.parse_str("https://example.com").await?;
//! println!("{:?}", og.title());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod parse;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, OpenGraphError, Result};
pub use fetch::{decode_body, parse_str, parse_url, OpenGraphClient};
pub use parse::{declarations, extract, Declaration, OgProperty, OpenGraph, OpenGraphBuilder};
pub use url::Url;

/// Extracts Open Graph metadata from HTML text without any network access.
///
/// Equivalent to [`extract`].
pub fn parse_html(html: &str) -> Result<OpenGraph> {
    extract(html)
}

//! Error type definitions.
//!
//! This module defines the errors surfaced by the extractor, the fetch façade,
//! and application startup.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration failed validation.
    #[error("Configuration error: {0}")]
    InvalidConfig(#[from] ConfigValidationError),
}

/// Errors returned by the Open Graph extractor and fetch façade.
///
/// The enumeration is flat and closed: exactly one variant describes a failed
/// call. Malformed `og:url` / `og:image` values are never reported here; the
/// extractor drops them and leaves the field absent.
#[derive(Error, Debug)]
pub enum OpenGraphError {
    /// The supplied string is not an absolute URL with a scheme.
    ///
    /// Only raised by the string-based entry point, before any network access.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure while fetching the page.
    ///
    /// Covers connection failures, timeouts, and failures reading the response
    /// body. The originating `reqwest::Error` is kept as the error source.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),

    /// The response body could not be decoded as text, or the matcher could
    /// not be constructed.
    #[error("Parsing error: {0}")]
    Parsing(String),
}

impl OpenGraphError {
    /// Returns a short, stable label for the error kind (used in log lines).
    pub fn kind(&self) -> &'static str {
        match self {
            OpenGraphError::InvalidUrl(_) => "invalid_url",
            OpenGraphError::Network(_) => "network",
            OpenGraphError::Parsing(_) => "parsing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_url_display() {
        let err = OpenGraphError::InvalidUrl("random string".to_string());
        assert_eq!(err.to_string(), "Invalid URL: random string");
        assert_eq!(err.kind(), "invalid_url");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parsing_display() {
        let err = OpenGraphError::Parsing("response body is not valid UTF-8".to_string());
        assert_eq!(
            err.to_string(),
            "Parsing error: response body is not valid UTF-8"
        );
        assert_eq!(err.kind(), "parsing");
    }

    #[tokio::test]
    async fn test_network_error_keeps_source() {
        // Port 1 on localhost is not listening in any sane test environment
        let cause = reqwest::get("http://127.0.0.1:1/")
            .await
            .expect_err("connecting to a closed port should fail");
        let err = OpenGraphError::from(cause);
        assert_eq!(err.kind(), "network");
        assert!(err.to_string().starts_with("Network error: "));
        assert!(
            err.source().is_some(),
            "Network errors should carry the originating cause"
        );
    }
}

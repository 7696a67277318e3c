//! Fetch-and-parse façade.
//!
//! Each entry point obtains text and hands it to [`crate::extract`]:
//! - [`OpenGraphClient::parse_str`] validates a URL string first
//! - [`OpenGraphClient::parse_url`] sends a GET
//! - [`OpenGraphClient::parse_request`] sends a caller-built request
//!
//! There are no retries or caching. Each call makes one request; dropping the
//! future cancels it, and the configured timeout surfaces as a network error.

mod request;
mod response;

use reqwest::{Client, Request};
use url::Url;

use crate::config::Config;
use crate::error_handling::{InitializationError, OpenGraphError, Result};
use crate::initialization::{build_client, init_client};
use crate::parse::{extract, OpenGraph};
use crate::utils::parse_absolute_url;

pub use response::decode_body;

/// Fetches pages and extracts their Open Graph metadata.
///
/// Cloning is cheap; clones share the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct OpenGraphClient {
    client: Client,
}

impl OpenGraphClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> std::result::Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
        })
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying HTTP client, for building requests to pass to
    /// [`parse_request`](Self::parse_request).
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Validates `input` as an absolute URL, then fetches and parses it.
    ///
    /// # Errors
    ///
    /// - `OpenGraphError::InvalidUrl` if `input` is not an absolute URL; no
    ///   request is made in that case
    /// - otherwise as [`parse_url`](Self::parse_url)
    pub async fn parse_str(&self, input: &str) -> Result<OpenGraph> {
        let url = parse_absolute_url(input)
            .ok_or_else(|| OpenGraphError::InvalidUrl(input.to_string()))?;
        self.parse_url(&url).await
    }

    /// Fetches `url` with a GET request and parses the body.
    ///
    /// # Errors
    ///
    /// - `OpenGraphError::Network` on transport or body-read failure
    /// - `OpenGraphError::Parsing` if the body is not valid UTF-8
    pub async fn parse_url(&self, url: &Url) -> Result<OpenGraph> {
        let request = request::build_get_request(&self.client, url)?;
        self.parse_request(request).await
    }

    /// Executes a caller-supplied request and parses the body.
    ///
    /// The request is sent as-is: method, headers, and body are not altered.
    ///
    /// # Errors
    ///
    /// As [`parse_url`](Self::parse_url).
    pub async fn parse_request(&self, request: Request) -> Result<OpenGraph> {
        let text = response::fetch_text(&self.client, request).await?;
        extract(&text).inspect_err(|e| log::error!("Extraction failed ({}): {e}", e.kind()))
    }
}

/// Client built from `Config::default()` for the free functions.
///
/// A failure to build the client is reported as `OpenGraphError::Network`.
fn default_client() -> Result<OpenGraphClient> {
    Ok(OpenGraphClient::with_client(build_client(&Config::default())?))
}

/// Fetches `url` with a client built from `Config::default()` and parses it.
///
/// See [`OpenGraphClient::parse_url`].
pub async fn parse_url(url: &Url) -> Result<OpenGraph> {
    default_client()?.parse_url(url).await
}

/// Validates `input`, fetches it with a client built from `Config::default()`,
/// and parses it.
///
/// See [`OpenGraphClient::parse_str`].
pub async fn parse_str(input: &str) -> Result<OpenGraph> {
    default_client()?.parse_str(input).await
}

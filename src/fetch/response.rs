//! Response handling: executing a request and decoding its body.

use log::{debug, warn};
use reqwest::{Client, Request};

use crate::error_handling::{OpenGraphError, Result};

/// Executes `request` and returns the response body as text.
///
/// The status code is not checked: error pages carry Open Graph tags too, so
/// a non-success status is logged and the body is still returned.
///
/// # Errors
///
/// - `OpenGraphError::Network` if the request fails or the body cannot be read
/// - `OpenGraphError::Parsing` if the body is not valid UTF-8
pub(crate) async fn fetch_text(client: &Client, request: Request) -> Result<String> {
    let method = request.method().clone();
    let url = request.url().clone();
    debug!("Fetching {method} {url}");

    let response = client.execute(request).await?;
    let status = response.status();
    if !status.is_success() {
        warn!("{url} responded with {status}; parsing body anyway");
    }

    let body = response.bytes().await?;
    debug!("Read {} bytes from {url}", body.len());
    decode_body(&body)
}

/// Decodes a response body as UTF-8.
///
/// Decoding is strict: any invalid sequence fails the whole body rather than
/// being replaced.
///
/// # Errors
///
/// Returns `OpenGraphError::Parsing` describing the first invalid byte.
pub fn decode_body(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| OpenGraphError::Parsing(format!("response body is not valid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_utf8() {
        let text = decode_body("<meta property=\"og:title\" content=\"Café\">".as_bytes()).unwrap();
        assert!(text.contains("Café"));
    }

    #[test]
    fn test_decode_body_empty() {
        assert_eq!(decode_body(b"").unwrap(), "");
    }

    #[test]
    fn test_decode_body_invalid() {
        let err = decode_body(&[b'<', 0xff, 0xfe, b'>']).unwrap_err();
        match err {
            OpenGraphError::Parsing(reason) => assert!(reason.contains("UTF-8")),
            other => panic!("Expected Parsing error, got {other:?}"),
        }
    }
}

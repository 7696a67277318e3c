//! HTTP request building.

use reqwest::{Client, Method, Request};
use url::Url;

/// Accept header sent with synthesized requests.
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Builds the GET request used by the URL-based entry points.
///
/// Only an `Accept` header is added; the client supplies the User-Agent and
/// timeout. Callers needing anything else build their own `reqwest::Request`
/// and use `OpenGraphClient::parse_request`.
pub(crate) fn build_get_request(client: &Client, url: &Url) -> Result<Request, reqwest::Error> {
    client
        .request(Method::GET, url.clone())
        .header(reqwest::header::ACCEPT, ACCEPT_HTML)
        .build()
}

//! Absolute URL validation.

use url::Url;

/// Parses `input` as an absolute URL.
///
/// Accepts any string the WHATWG URL parser accepts without a base, which
/// implies a non-empty scheme. Relative references (`/path`, `image.jpg`,
/// `invalid-url`) and free text are rejected. The scheme is not restricted
/// to http/https: `og:image` values such as `data:` URLs are valid.
///
/// # Returns
///
/// `Some(url)` if the string is an absolute URL, `None` otherwise.
pub fn parse_absolute_url(input: &str) -> Option<Url> {
    // A successful parse always carries a non-empty scheme
    Url::parse(input)
        .inspect_err(|e| log::trace!("Not an absolute URL ({e}): {input:?}"))
        .ok()
}

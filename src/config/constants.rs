//! Configuration constants.
//!
//! Defaults for the fetch façade and the extraction pattern.

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag or `Config::user_agent`.
pub const DEFAULT_USER_AGENT: &str = concat!("opengraph/", env!("CARGO_PKG_VERSION"));

/// Pattern for a single Open Graph declaration.
///
/// Tag and attribute names are case-insensitive; the `og:` prefix and both
/// values are matched literally. `property` must come before `content`, both
/// values must be double-quoted, and only whitespace may separate them.
/// Capture 1 is the full property name, capture 2 the content.
pub const OG_META_PATTERN: &str =
    r#"<(?i:meta)\s+(?i:property)="(og:[^"]*)"\s+(?i:content)="([^"]*)"\s*/?>"#;

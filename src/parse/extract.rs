//! Open Graph declaration scanning and folding.
//!
//! Declarations are located with a single regular expression over the raw
//! text rather than by building a document tree. This keeps the accepted
//! input set exact: only `<meta property="og:..." content="...">` in that
//! attribute order, double-quoted, optionally self-closed. Everything else in
//! the document, well-formed or not, is skipped.

use regex::Regex;
use std::sync::LazyLock;

use super::metadata::OpenGraph;
use super::property::OgProperty;
use crate::config::OG_META_PATTERN;
use crate::error_handling::{OpenGraphError, Result};
use crate::utils::compile_regex;

static OG_META_RE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| compile_regex(OG_META_PATTERN, "OG_META_RE"));

/// One matched `<meta property="og:..." content="...">` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Full property name, including the `og:` prefix
    pub property: &'a str,
    /// Raw content attribute value (no entity decoding)
    pub content: &'a str,
}

fn og_meta_regex() -> Result<&'static Regex> {
    OG_META_RE
        .as_ref()
        .map_err(|e| OpenGraphError::Parsing(format!("failed to build meta tag matcher: {e}")))
}

/// Scans `text` for Open Graph declarations, in document order.
///
/// Every `og:`-prefixed property is returned, including ones that
/// [`extract`] ignores.
///
/// # Errors
///
/// Returns `OpenGraphError::Parsing` only if the matcher cannot be built.
pub fn declarations(text: &str) -> Result<Vec<Declaration<'_>>> {
    let re = og_meta_regex()?;
    Ok(re
        .captures_iter(text)
        .filter_map(|caps| {
            Some(Declaration {
                property: caps.get(1)?.as_str(),
                content: caps.get(2)?.as_str(),
            })
        })
        .collect())
}

/// Extracts Open Graph metadata from HTML text.
///
/// Declarations are folded in document order; a later declaration of the
/// same property replaces an earlier one. `og:url` and `og:image` values that
/// are not absolute URLs are skipped without error, leaving any earlier
/// valid value in place.
///
/// # Errors
///
/// Returns `OpenGraphError::Parsing` only if the matcher cannot be built.
/// Text with no declarations (including empty text) yields an empty record.
///
/// # Example
///
/// ```
/// let html = r#"<meta property="og:title" content="Hello"><meta property="og:url" content="not a url">"#;
/// let og = opengraph::extract(html).unwrap();
/// assert_eq!(og.title(), Some("Hello"));
/// assert_eq!(og.url(), None);
/// ```
pub fn extract(text: &str) -> Result<OpenGraph> {
    let mut builder = OpenGraph::builder();
    let mut matched = 0usize;

    for decl in declarations(text)? {
        matched += 1;
        let Ok(property) = decl.property.parse::<OgProperty>() else {
            log::trace!("Ignoring unsupported property {}", decl.property);
            continue;
        };
        if builder.apply(property, decl.content) {
            log::debug!("Extracted {property}: {:?}", decl.content);
        } else {
            log::debug!(
                "Skipping {property}: content is not an absolute URL: {:?}",
                decl.content
            );
        }
    }

    let record = builder.build();
    log::debug!(
        "Matched {matched} Open Graph declarations (record empty: {})",
        record.is_empty()
    );
    Ok(record)
}

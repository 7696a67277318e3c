//! Regex compilation utilities.

use regex::Regex;

/// Compiles a regex pattern, logging a detailed message on failure.
///
/// Static patterns are compile-time constants, so a failure here is a
/// programming error. It is still returned rather than panicking so callers
/// can surface it as an ordinary error.
///
/// # Arguments
///
/// * `pattern` - The regex pattern to compile
/// * `context` - Context description for error logging (e.g., "OG_META_RE")
pub fn compile_regex(pattern: &str, context: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern).inspect_err(|e| {
        log::error!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern,
            context,
            e
        );
    })
}

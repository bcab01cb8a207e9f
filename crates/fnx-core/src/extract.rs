//! Filename extraction from source strings.
//!
//! Derives the display filename from a URL-like or path-like source string:
//! the last `/`-separated segment, with any `?` query component discarded.

use thiserror::Error;

/// No usable filename in the source string (empty input, trailing slash,
/// or nothing left once the query component is stripped).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no filename could be extracted from {input:?}")]
pub struct ExtractError {
    /// The source string the extraction was attempted on.
    pub input: String,
}

/// Extracts the display filename from a URL-like or path-like source string.
///
/// Everything from the first `?` (inclusive) is discarded, the remainder is
/// split on `/`, and the last segment is returned. Sources are treated as
/// plain strings, not parsed as URLs, so relative paths like `a/b/c.png`
/// work the same as full URLs.
///
/// Fails when the final segment is empty: empty source, source ending in
/// `/`, or a source that is only a query string.
///
/// # Examples
///
/// - `extract_filename("a/b/c.png?x=1")` → `"c.png"`
/// - `extract_filename("c.png")` → `"c.png"`
/// - `extract_filename("a/b/")` → error
pub fn extract_filename(source: &str) -> Result<String, ExtractError> {
    let path = match source.split_once('?') {
        Some((path, _query)) => path,
        None => source,
    };
    let segment = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    if segment.is_empty() {
        return Err(ExtractError {
            input: source.to_string(),
        });
    }
    Ok(segment.to_string())
}

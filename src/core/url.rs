//! Site-relative URL paths.
//!
//! A `UrlPath` is stored decoded (`/art/café/`). Percent-encoding only
//! happens at the edges: `from_browser` decodes what a browser sent,
//! `to_encoded` produces what goes into an `href` or `src`.

use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::Serialize;

/// Escaped inside a segment: everything but ASCII alphanumerics and `-._~`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Decoded, rooted URL path.
///
/// Always starts with `/`. Page paths (detail pages) also end with `/`;
/// asset paths point at a file and keep their last segment as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Page path from a request path as a browser sends it.
    ///
    /// The query and fragment are cut before decoding, so an encoded `%3F`
    /// survives as a literal `?` in the path. Invalid UTF-8 is kept encoded.
    pub fn from_browser(encoded: &str) -> Self {
        let path = without_query(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map_or_else(|_| path.to_owned(), |s| s.into_owned());
        Self::page(decoded.trim())
    }

    /// Page path from an already decoded string.
    pub fn from_page(decoded: &str) -> Self {
        Self::page(without_query(decoded.trim()))
    }

    /// File path (`/assets/a.png`), only made rooted.
    pub fn from_asset(decoded: &str) -> Self {
        Self(rooted(decoded.trim()).into())
    }

    fn page(path: &str) -> Self {
        let mut path = rooted(path);
        if !path.ends_with('/') {
            path.push('/');
        }
        Self(path.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encode every segment, keeping the `/` separators.
    pub fn to_encoded(&self) -> String {
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The one segment right below `prefix`.
    ///
    /// `/art/sunset/` under `/art` is `Some("sunset")`. The prefix itself and
    /// anything nested deeper (`/art/a/b/`) give `None`.
    pub fn segment_after(&self, prefix: &str) -> Option<&str> {
        let prefix = prefix.trim_end_matches('/');
        self.0
            .strip_prefix(prefix)?
            .strip_prefix('/')
            .map(|rest| rest.trim_end_matches('/'))
            .filter(|segment| !segment.is_empty() && !segment.contains('/'))
    }
}

fn without_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

fn rooted(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

//! # Schema References
//!
//! Parses the URI-shaped strings found in `$ref` fields and reduces them to
//! the one piece the resolver uses: the basename of the decoded path.
//! Scheme, authority, query and fragment are ignored.
//!
//! ## Basename Rules
//!
//! - Trailing slashes are stripped before the last segment is taken.
//! - An empty path yields `"."`; a path of only slashes yields `"/"`.
//! - Opaque URIs (`urn:...`) have no hierarchical path and yield `"."`.
//! - Escapes are decoded first, so `a%2Fb.json` yields `b.json`.
//! - Absolute URIs use the parsed URL path: dot-segments are already
//!   removed, and special schemes with no path (`https://host`) yield `"/"`.

use std::fmt;

use url::Url;

use crate::error::ReferenceError;

/// Base used to resolve network-path references such as `//host/x.json`.
const RELATIVE_BASE: &str = "file:///";

/// A parsed schema reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReference {
    raw: String,
    basename: String,
}

impl SchemaReference {
    /// Parse a relative or absolute reference.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError`] for invalid percent-escapes, control
    /// characters, or anything the URL parser rejects.
    pub fn parse(reference: &str) -> Result<Self, ReferenceError> {
        check_lexical(reference)?;
        let path = reference_path(reference)?;
        let decoded = urlencoding::decode_binary(path.as_bytes());
        let decoded = String::from_utf8_lossy(&decoded);
        Ok(Self {
            raw: reference.to_string(),
            basename: last_segment(&decoded).to_string(),
        })
    }

    /// The reference exactly as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Final segment of the decoded path.
    pub fn basename(&self) -> &str {
        &self.basename
    }
}

impl fmt::Display for SchemaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for SchemaReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reject control characters anywhere, and malformed escapes outside the
/// query. The query is ignored, so its escapes are never decoded.
fn check_lexical(reference: &str) -> Result<(), ReferenceError> {
    let bytes = reference.as_bytes();
    if let Some(offset) = bytes.iter().position(|&b| b < 0x20 || b == 0x7f) {
        return Err(ReferenceError::ControlCharacter { offset });
    }

    let fragment_start = reference.find('#').unwrap_or(reference.len());
    let query_start = reference[..fragment_start]
        .find('?')
        .unwrap_or(fragment_start);
    for offset in (0..bytes.len()).filter(|&i| i < query_start || i > fragment_start) {
        if bytes[offset] != b'%' {
            continue;
        }
        let well_formed = bytes.len() > offset + 2
            && bytes[offset + 1].is_ascii_hexdigit()
            && bytes[offset + 2].is_ascii_hexdigit();
        if !well_formed {
            let escape: String = reference[offset..].chars().take(3).collect();
            return Err(ReferenceError::InvalidEscape { offset, escape });
        }
    }
    Ok(())
}

/// Extract the still-encoded path component of a reference.
fn reference_path(reference: &str) -> Result<String, ReferenceError> {
    match Url::parse(reference) {
        Ok(url) if url.cannot_be_a_base() => Ok(String::new()),
        Ok(url) => Ok(url.path().to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // Resolve to surface parser errors, but keep the relative path
            // as written so an empty reference stays empty.
            let joined = Url::parse(RELATIVE_BASE)?.join(reference)?;
            if reference.starts_with("//") {
                return Ok(joined.path().to_string());
            }
            let end = reference.find(['?', '#']).unwrap_or(reference.len());
            Ok(reference[..end].to_string())
        }
        Err(e) => Err(e.into()),
    }
}

fn last_segment(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

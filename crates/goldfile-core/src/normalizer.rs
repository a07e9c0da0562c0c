//! Normalizer: replaces volatile values with stable placeholders.
//!
//! UUIDs keep their identity relationships: the n-th distinct UUID (by first
//! appearance) becomes `00000000-0000-0000-0000-` followed by `n` as a
//! 12-digit zero-padded number, at every position it occurred. Timestamps
//! lose identity entirely and collapse to one constant per format.
//!
//! Normalization is a pure function of the text. Each call builds a fresh
//! [`PlaceholderMapping`]; nothing carries over between buffers, so a golden
//! file and an actual output only agree if their UUIDs first appear in the
//! same relative order.
//!
//! The passes work on bytes. Anything outside a match, including invalid
//! UTF-8, is carried through untouched; the `&str` entry points are thin
//! wrappers for callers that already hold text.

use regex::bytes::NoExpand;

use crate::error::Result;
use crate::patterns::{self, RFC3339_PATTERN, RFC7232_PATTERN};
use crate::types::{CompareOptions, VolatileKind, VolatileValue};

/// Prefix shared by every UUID placeholder.
pub const UUID_PLACEHOLDER_PREFIX: &str = "00000000-0000-0000-0000-";

/// Constant every RFC3339 timestamp collapses to.
pub const RFC3339_PLACEHOLDER: &str = "0001-01-01T00:00:00Z";

/// Constant every RFC7232 last-modified timestamp collapses to.
pub const RFC7232_PLACEHOLDER: &str = "Mon, 01 Jan 0001 00:00:00 GMT";

/// The placeholder for the `n`-th distinct UUID, counting from 1.
///
/// ```rust
/// assert_eq!(
///     goldfile_core::uuid_placeholder(1),
///     "00000000-0000-0000-0000-000000000001"
/// );
/// ```
pub fn uuid_placeholder(n: usize) -> String {
    format!("{UUID_PLACEHOLDER_PREFIX}{n:012}")
}

// ---------------------------------------------------------------------------
// PlaceholderMapping
// ---------------------------------------------------------------------------

/// Ordered mapping from first-seen UUID to its placeholder, scoped to one
/// text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMapping {
    entries: Vec<(VolatileValue, String)>,
}

impl PlaceholderMapping {
    /// Build the mapping for every distinct UUID in `text`.
    pub fn from_text(text: impl AsRef<[u8]>) -> Result<Self> {
        let entries = patterns::find_uuids(text)?
            .into_iter()
            .enumerate()
            .map(|(idx, value)| (value, uuid_placeholder(idx + 1)))
            .collect();
        Ok(Self { entries })
    }

    /// Replace every occurrence of each mapped UUID, literally, in mapping
    /// order.
    pub fn apply(&self, bytes: &[u8]) -> Vec<u8> {
        self.entries
            .iter()
            .fold(bytes.to_vec(), |acc, (value, placeholder)| {
                replace_literal(&acc, value.text.as_bytes(), placeholder.as_bytes())
            })
    }

    /// The placeholder assigned to `text`, if it was found.
    pub fn placeholder_for(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(value, _)| value.text == text)
            .map(|(_, placeholder)| placeholder.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VolatileValue, &str)> {
        self.entries.iter().map(|(v, p)| (v, p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Normalization passes
// ---------------------------------------------------------------------------

/// Normalize one kind of volatile value in `bytes`.
pub fn normalize_bytes(bytes: &[u8], kind: VolatileKind) -> Result<Vec<u8>> {
    match kind {
        VolatileKind::Uuid => {
            let mapping = PlaceholderMapping::from_text(bytes)?;
            tracing::trace!(uuids = mapping.len(), "replacing uuids");
            Ok(mapping.apply(bytes))
        }
        VolatileKind::Timestamp => Ok(replace_timestamps(bytes)),
    }
}

/// Apply every normalization `opts` enables, UUIDs before timestamps.
pub fn normalize_bytes_with(bytes: &[u8], opts: &CompareOptions) -> Result<Vec<u8>> {
    opts.volatile_kinds()
        .try_fold(bytes.to_vec(), |acc, kind| normalize_bytes(&acc, kind))
}

/// Normalize one kind of volatile value in `text`.
pub fn normalize(text: &str, kind: VolatileKind) -> Result<String> {
    normalize_bytes(text.as_bytes(), kind).map(into_text)
}

/// [`normalize_bytes_with`] for text.
pub fn normalize_with(text: &str, opts: &CompareOptions) -> Result<String> {
    normalize_bytes_with(text.as_bytes(), opts).map(into_text)
}

/// RFC3339 first over the whole buffer, then RFC7232 over the result.
fn replace_timestamps(bytes: &[u8]) -> Vec<u8> {
    let pass = RFC3339_PATTERN.replace_all(bytes, NoExpand(RFC3339_PLACEHOLDER.as_bytes()));
    RFC7232_PATTERN
        .replace_all(&pass, NoExpand(RFC7232_PLACEHOLDER.as_bytes()))
        .into_owned()
}

fn replace_literal(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(at) = rest.windows(from.len()).position(|w| w == from) {
        out.extend_from_slice(&rest[..at]);
        out.extend_from_slice(to);
        rest = &rest[at + from.len()..];
    }
    out.extend_from_slice(rest);
    out
}

// ASCII matches swapped for ASCII placeholders keep valid UTF-8 valid.
fn into_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

//! Core types for goldfile-core.
//!
//! This module defines the data shared across every pipeline stage: the
//! per-call [`CompareOptions`], the [`Actual`] input union handed to the
//! serializer, and the [`VolatileValue`] matches produced by the pattern finder.

use std::fmt;

use serde::Serialize;

use crate::diff::DiffGranularity;

// ---------------------------------------------------------------------------
// CompareOptions
// ---------------------------------------------------------------------------

/// How a single comparison (and golden file regeneration) takes place.
///
/// Options are immutable for the duration of a call. The builder-style
/// setters consume and return `self`:
///
/// ```rust
/// use goldfile_core::CompareOptions;
///
/// let opts = CompareOptions::default().structured().uuid_agnostic();
/// assert!(opts.serialize_as_structured);
/// assert!(opts.uuid_agnostic);
/// assert!(!opts.datetime_agnostic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareOptions {
    /// Replace every distinct UUID with a sequential placeholder on both sides
    /// (and in the written golden file) before comparing.
    pub uuid_agnostic: bool,
    /// Collapse RFC3339 and RFC7232 timestamps to constant placeholders.
    pub datetime_agnostic: bool,
    /// Marshal the actual value as indented JSON instead of treating it as
    /// raw bytes or text.
    pub serialize_as_structured: bool,
    /// Token granularity of the diff reported on mismatch. `None` defers to
    /// the configured granularity, or [`DiffGranularity::Line`] without one.
    pub granularity: Option<DiffGranularity>,
}

impl CompareOptions {
    pub fn uuid_agnostic(mut self) -> Self {
        self.uuid_agnostic = true;
        self
    }

    pub fn datetime_agnostic(mut self) -> Self {
        self.datetime_agnostic = true;
        self
    }

    pub fn structured(mut self) -> Self {
        self.serialize_as_structured = true;
        self
    }

    pub fn granularity(mut self, granularity: DiffGranularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// The volatile kinds this configuration normalizes, in application order
    /// (UUIDs first, then timestamps).
    pub fn volatile_kinds(&self) -> impl Iterator<Item = VolatileKind> {
        [
            (self.uuid_agnostic, VolatileKind::Uuid),
            (self.datetime_agnostic, VolatileKind::Timestamp),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
    }
}

// ---------------------------------------------------------------------------
// Volatile values
// ---------------------------------------------------------------------------

/// What the pattern finder is asked to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolatileKind {
    /// RFC 4122 UUIDs (version 1-5, variant 10xx).
    Uuid,
    /// RFC3339 and RFC7232 last-modified timestamps.
    Timestamp,
}

impl fmt::Display for VolatileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolatileKind::Uuid => f.pad("uuid"),
            VolatileKind::Timestamp => f.pad("timestamp"),
        }
    }
}

/// The concrete pattern a [`VolatileValue`] matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolatileClass {
    Uuid,
    Rfc3339,
    Rfc7232,
}

impl VolatileClass {
    pub fn kind(self) -> VolatileKind {
        match self {
            VolatileClass::Uuid => VolatileKind::Uuid,
            VolatileClass::Rfc3339 | VolatileClass::Rfc7232 => VolatileKind::Timestamp,
        }
    }
}

impl fmt::Display for VolatileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolatileClass::Uuid => f.pad("uuid"),
            VolatileClass::Rfc3339 => f.pad("rfc3339"),
            VolatileClass::Rfc7232 => f.pad("rfc7232"),
        }
    }
}

/// A matched volatile substring. Identity is the exact text: two matches with
/// the same text are the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolatileValue {
    /// The matched text, verbatim.
    pub text: String,
    /// Which pattern produced the match.
    pub class: VolatileClass,
    /// Byte offset of the first occurrence in the scanned text.
    pub offset: usize,
}

// ---------------------------------------------------------------------------
// Actual input
// ---------------------------------------------------------------------------

/// Object-safe capability to render a value as indented JSON.
///
/// Implemented for every `T: Serialize`, so callers never implement it by
/// hand; it exists so [`Actual`] can hold any serializable value behind a
/// `&dyn` reference.
pub trait StructuredValue {
    fn to_pretty_json(&self) -> serde_json::Result<String>;
}

impl<T: Serialize + ?Sized> StructuredValue for T {
    fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The actual output handed to a comparison.
///
/// The variant is chosen statically by the conversion the caller uses, which
/// fixes the precedence bytes → text → stringer:
///
/// | Source | Variant |
/// |--------|---------|
/// | `&[u8]`, `&Vec<u8>`, `&[u8; N]` | [`Actual::Bytes`] |
/// | `&str`, `&String` | [`Actual::Text`] |
/// | [`Actual::display`] | [`Actual::Stringer`] |
/// | [`Actual::structured`] | [`Actual::Structured`] |
#[derive(Clone, Copy)]
pub enum Actual<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
    Stringer(&'a dyn fmt::Display),
    Structured(&'a dyn StructuredValue),
}

impl<'a> Actual<'a> {
    /// Wrap a value that renders itself through [`fmt::Display`].
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Actual::Stringer(value)
    }

    /// Wrap any serializable value.
    pub fn structured<T: Serialize>(value: &'a T) -> Self {
        Actual::Structured(value)
    }

    /// Variant name used in diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Actual::Bytes(_) => "bytes",
            Actual::Text(_) => "text",
            Actual::Stringer(_) => "stringer",
            Actual::Structured(_) => "structured value",
        }
    }
}

impl fmt::Debug for Actual<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actual::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Actual::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Actual::Stringer(v) => f.debug_tuple("Stringer").field(&v.to_string()).finish(),
            Actual::Structured(_) => f.write_str("Structured(..)"),
        }
    }
}

impl<'a> From<&'a [u8]> for Actual<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Actual::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Actual<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Actual::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Actual<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Actual::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Actual<'a> {
    fn from(text: &'a str) -> Self {
        Actual::Text(text)
    }
}

impl<'a> From<&'a String> for Actual<'a> {
    fn from(text: &'a String) -> Self {
        Actual::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volatile_kinds_follow_uuid_then_timestamp_order() {
        let opts = CompareOptions::default().datetime_agnostic().uuid_agnostic();
        let kinds: Vec<_> = opts.volatile_kinds().collect();
        assert_eq!(kinds, vec![VolatileKind::Uuid, VolatileKind::Timestamp]);

        let none: Vec<_> = CompareOptions::default().volatile_kinds().collect();
        assert!(none.is_empty());
    }

    #[test]
    fn conversions_pick_the_expected_variant() {
        let bytes = vec![b'a', b'b'];
        let text = String::from("ab");
        assert_eq!(Actual::from(&bytes).variant_name(), "bytes");
        assert_eq!(Actual::from(b"ab").variant_name(), "bytes");
        assert_eq!(Actual::from(&text).variant_name(), "text");
        assert_eq!(Actual::from("ab").variant_name(), "text");
        assert_eq!(Actual::display(&42).variant_name(), "stringer");
        assert_eq!(Actual::structured(&[1, 2]).variant_name(), "structured value");
    }

    #[test]
    fn class_maps_back_to_kind() {
        assert_eq!(VolatileClass::Uuid.kind(), VolatileKind::Uuid);
        assert_eq!(VolatileClass::Rfc3339.kind(), VolatileKind::Timestamp);
        assert_eq!(VolatileClass::Rfc7232.kind(), VolatileKind::Timestamp);
    }
}

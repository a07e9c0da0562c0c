//! Serializer: turns an [`Actual`] into the canonical bytes that are compared
//! and written to golden files.
//!
//! Structured mode marshals through `serde_json` with two-space indentation
//! and the key order the value's `Serialize` impl produces. Raw mode accepts
//! bytes, text and `Display` values only.

use std::borrow::Cow;

use crate::error::{GoldenError, Result};
use crate::types::Actual;

/// Render `actual` as bytes.
///
/// With `structured` set, every variant is marshalled as JSON (text and
/// stringer output become JSON strings, bytes a JSON array). Otherwise bytes
/// and text are borrowed verbatim, stringers are rendered, and structured
/// values are rejected with [`GoldenError::UnsupportedType`].
pub fn serialize<'a>(actual: &Actual<'a>, structured: bool) -> Result<Cow<'a, [u8]>> {
    if structured {
        return to_structured(actual).map(|text| Cow::Owned(text.into_bytes()));
    }
    match *actual {
        Actual::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
        Actual::Text(text) => Ok(Cow::Borrowed(text.as_bytes())),
        Actual::Stringer(value) => Ok(Cow::Owned(value.to_string().into_bytes())),
        Actual::Structured(_) => Err(GoldenError::UnsupportedType {
            variant: actual.variant_name(),
        }),
    }
}

fn to_structured(actual: &Actual<'_>) -> Result<String> {
    let rendered = match actual {
        Actual::Bytes(bytes) => serde_json::to_string_pretty(bytes),
        Actual::Text(text) => serde_json::to_string_pretty(text),
        Actual::Stringer(value) => serde_json::to_string_pretty(&value.to_string()),
        Actual::Structured(value) => value.to_pretty_json(),
    };
    rendered.map_err(GoldenError::Serialization)
}

//! Pattern finder: locates volatile values (UUIDs and timestamps) in text.
//!
//! Scans are pure and stateless: the same text always yields the same ordered,
//! de-duplicated list. Matching uses leftmost-first, non-overlapping regex
//! semantics over raw bytes, so input need not be valid UTF-8.
//!
//! # Patterns
//!
//! | Class | Shape |
//! |-------|-------|
//! | UUID | `xxxxxxxx-xxxx-Vxxx-Nxxx-xxxxxxxxxxxx`, version `V` in 1-5, variant `N` in `89abAB` |
//! | RFC3339 | `YYYY-MM-DD[Tt]HH:MM:SS[.frac]` then `Z`, `z` or `±HH:MM` |
//! | RFC7232 | `Www, DD Mon YYYY HH:MM:SS TZ`, TZ a known zone or any uppercase token |
//!
//! The zone is not anchored at a word boundary: `GMTx` matches up to `GMT`.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::bytes::Regex;
use uuid::Uuid;

use crate::error::{GoldenError, Result};
use crate::types::{VolatileClass, VolatileKind, VolatileValue};

// ---------------------------------------------------------------------------
// Pattern sources
// ---------------------------------------------------------------------------

const UUID_SRC: &str =
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}";

const RFC3339_SRC: &str = concat!(
    // date
    "([0-9]+)-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])",
    "[Tt]",
    // time, leap second allowed
    "([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9]|60)(\\.[0-9]+)?",
    // offset
    "(([Zz])|([+-]([01][0-9]|2[0-3]):[0-5][0-9]))",
);

const RFC7232_SRC: &str = concat!(
    "(Mon|Tue|Wed|Thu|Fri|Sat|Sun), ",
    "[0-9]{2} ",
    "(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) ",
    "[0-9]{4} ",
    "([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9]|60) ",
    // known zones win over the catch-all
    "(GMT|CEST|UTC|IST|[A-Z]+)",
);

lazy_static! {
    pub static ref UUID_PATTERN: Regex = Regex::new(UUID_SRC).expect("UUID pattern must compile");
    pub static ref RFC3339_PATTERN: Regex =
        Regex::new(RFC3339_SRC).expect("RFC3339 pattern must compile");
    pub static ref RFC7232_PATTERN: Regex =
        Regex::new(RFC7232_SRC).expect("RFC7232 pattern must compile");
}

// ---------------------------------------------------------------------------
// Finders
// ---------------------------------------------------------------------------

/// Find every distinct volatile value of `kind` in `text`, ordered by first
/// appearance.
pub fn find(text: impl AsRef<[u8]>, kind: VolatileKind) -> Result<Vec<VolatileValue>> {
    let text = text.as_ref();
    match kind {
        VolatileKind::Uuid => find_uuids(text),
        VolatileKind::Timestamp => Ok(find_timestamps(text)),
    }
}

/// Find distinct UUIDs. Every textual match must also parse as a UUID; a
/// match that does not is reported as [`GoldenError::MalformedUuid`].
pub fn find_uuids(text: impl AsRef<[u8]>) -> Result<Vec<VolatileValue>> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for m in UUID_PATTERN.find_iter(text.as_ref()) {
        let candidate = ascii_text(m.as_bytes());
        Uuid::parse_str(&candidate).map_err(|source| GoldenError::MalformedUuid {
            text: candidate.clone(),
            source,
        })?;
        if seen.insert(m.as_bytes()) {
            found.push(VolatileValue {
                text: candidate,
                class: VolatileClass::Uuid,
                offset: m.start(),
            });
        }
    }
    tracing::trace!(count = found.len(), "uuids found");
    Ok(found)
}

/// Find distinct RFC3339 and RFC7232 timestamps. Matches of both patterns are
/// merged by offset.
pub fn find_timestamps(text: impl AsRef<[u8]>) -> Vec<VolatileValue> {
    let text = text.as_ref();
    let mut matches: Vec<(usize, &[u8], VolatileClass)> = RFC3339_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.as_bytes(), VolatileClass::Rfc3339))
        .chain(
            RFC7232_PATTERN
                .find_iter(text)
                .map(|m| (m.start(), m.as_bytes(), VolatileClass::Rfc7232)),
        )
        .collect();
    matches.sort_by_key(|(offset, _, _)| *offset);

    let mut seen = HashSet::new();
    let found: Vec<_> = matches
        .into_iter()
        .filter(|(_, matched, _)| seen.insert(*matched))
        .map(|(offset, matched, class)| VolatileValue {
            text: ascii_text(matched),
            class,
            offset,
        })
        .collect();
    tracing::trace!(count = found.len(), "timestamps found");
    found
}

// Every pattern matches ASCII only, so a match always decodes cleanly.
fn ascii_text(matched: &[u8]) -> String {
    String::from_utf8_lossy(matched).into_owned()
}

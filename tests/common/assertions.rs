//! Assertion macros for goldfile harnesses.
//!
//! These add context to failures so it is clear which kind of comparison
//! outcome was expected and what came back instead.

// ---------------------------------------------------------------------------
// Outcome assertions
// ---------------------------------------------------------------------------

/// Assert that a comparison result is `Ok`, printing the error (with its
/// diff) otherwise.
#[macro_export]
macro_rules! assert_matches_golden {
    ($result:expr) => {{
        let result: goldfile::Result<()> = $result;
        if let Err(err) = result {
            panic!("assert_matches_golden! failed:\n{err}");
        }
    }};
}

/// Assert that a comparison failed because the golden file is missing.
#[macro_export]
macro_rules! assert_not_found {
    ($result:expr) => {{
        let result: goldfile::Result<()> = $result;
        match result {
            Err(err) if err.is_not_found() => {}
            Err(err) => panic!("assert_not_found! failed: got a different error:\n  {err}"),
            Ok(()) => panic!("assert_not_found! failed: comparison succeeded"),
        }
    }};
}

/// Assert that a comparison failed on content, and return the diff.
#[macro_export]
macro_rules! assert_mismatch {
    ($result:expr) => {{
        let result: goldfile::Result<()> = $result;
        match result {
            Err(goldfile::GoldenError::Mismatch { diff, .. }) => diff,
            Err(err) => panic!("assert_mismatch! failed: got a different error:\n  {err}"),
            Ok(()) => panic!("assert_mismatch! failed: comparison succeeded"),
        }
    }};
}

// ---------------------------------------------------------------------------
// Text assertions
// ---------------------------------------------------------------------------

/// Assert that `text` contains no UUID-shaped or timestamp-shaped substring
/// other than placeholders.
pub fn assert_fully_normalized(text: &str) {
    use goldfile::normalizer::{RFC3339_PLACEHOLDER, RFC7232_PLACEHOLDER, UUID_PLACEHOLDER_PREFIX};
    use goldfile::{patterns, VolatileKind};

    for found in patterns::find(text, VolatileKind::Uuid).expect("find uuids") {
        assert!(
            found.text.starts_with(UUID_PLACEHOLDER_PREFIX),
            "unreplaced UUID {:?} at byte {} in:\n{text}",
            found.text,
            found.offset
        );
    }
    for found in patterns::find(text, VolatileKind::Timestamp).expect("find timestamps") {
        assert!(
            found.text == RFC3339_PLACEHOLDER || found.text == RFC7232_PLACEHOLDER,
            "unreplaced timestamp {:?} at byte {} in:\n{text}",
            found.text,
            found.offset
        );
    }
}

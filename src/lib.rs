//! goldfile: golden-file assertions for Rust tests.
//!
//! Compare generated output against a stored reference ("golden") file,
//! optionally ignoring UUIDs and timestamps so that nondeterministic values
//! do not cause spurious mismatches.
//!
//! ```rust,no_run
//! use goldfile::{assert_golden, Actual, CompareOptions};
//!
//! #[derive(serde::Serialize)]
//! struct Person {
//!     name: String,
//! }
//!
//! let person = Person { name: "John".into() };
//! assert_golden!(
//!     "tests/golden/person.golden.json",
//!     Actual::structured(&person),
//!     CompareOptions::default().structured()
//! );
//! ```
//!
//! # Regenerating golden files
//!
//! ```sh
//! GOLDFILE_UPDATE=1 cargo test
//! ```
//!
//! Update mode, a root directory for relative paths and the diff granularity
//! can also be set in a `goldfile.toml` next to `Cargo.toml`; see
//! [`GoldenConfig`].
//!
//! # Architecture
//!
//! ```text
//! compare_with_golden ──► Comparator ──► Serializer ──► Normalizer ──► Store
//!                                                   └──► Diff
//! ```

use std::path::Path;

pub use goldfile_core::{
    compare, config, diff, error, normalize, normalize_bytes, normalize_bytes_with,
    normalize_with, normalizer, patterns, serializer, store, types, Actual, CompareOptions,
    Comparator, DiffGranularity, DiffOp, DiffSpan, DiffStats, GoldenConfig, GoldenError,
    PlaceholderMapping, Result, StructuredValue, TextDiff, VolatileClass, VolatileKind,
    VolatileValue,
};

/// Compare `actual` with the golden file at `path`, failing the calling test
/// on any error.
///
/// Configuration (update mode, root, diff granularity) is loaded from
/// `goldfile.toml` and `GOLDFILE_*` variables on every call.
///
/// # Panics
///
/// Panics with the error message (including the diff on mismatch) when the
/// comparison fails for any reason.
#[track_caller]
pub fn compare_with_golden<'a>(
    path: impl AsRef<Path>,
    actual: impl Into<Actual<'a>>,
    opts: CompareOptions,
) {
    if let Err(err) = try_compare_with_golden(path, actual, opts) {
        panic!("{err}");
    }
}

/// [`compare_with_golden`] returning the error instead of panicking.
pub fn try_compare_with_golden<'a>(
    path: impl AsRef<Path>,
    actual: impl Into<Actual<'a>>,
    opts: CompareOptions,
) -> Result<()> {
    Comparator::from_env()?.compare(path, actual, &opts)
}

/// Assert that a value matches its golden file.
///
/// ```rust,no_run
/// use goldfile::{assert_golden, CompareOptions};
///
/// assert_golden!("tests/golden/greeting.golden", "hello");
/// assert_golden!(
///     "tests/golden/event.golden",
///     "at 2024-01-15T10:00:00Z",
///     CompareOptions::default().datetime_agnostic()
/// );
/// ```
#[macro_export]
macro_rules! assert_golden {
    ($path:expr, $actual:expr $(,)?) => {
        $crate::compare_with_golden($path, $actual, $crate::CompareOptions::default())
    };
    ($path:expr, $actual:expr, $opts:expr $(,)?) => {
        $crate::compare_with_golden($path, $actual, $opts)
    };
}

//! Comparator: the golden-file assertion itself.
//!
//! Stages run strictly in order and any failure aborts the comparison:
//!
//! | Stage | Work |
//! |-------|------|
//! | serialized | render the actual value as bytes |
//! | reference updated | (update mode only) normalize and write the golden file |
//! | reference loaded | read the golden file back, always |
//! | normalized | normalize golden bytes and actual bytes independently |
//! | compared | exact byte comparison, diff on mismatch |
//!
//! Bytes are only decoded (lossily) to render the diff of a mismatch.
//!
//! There is no locking: two comparisons writing the same golden file at the
//! same time is the caller's problem.

use std::path::Path;

use crate::config::GoldenConfig;
use crate::diff::TextDiff;
use crate::error::{GoldenError, Result};
use crate::normalizer::normalize_bytes_with;
use crate::serializer::serialize;
use crate::store;
use crate::types::{Actual, CompareOptions};

/// Compare `actual` against the golden file at `path`.
///
/// With `update` set, the golden file is first regenerated from `actual`
/// (normalized per `opts`). Relative paths resolve against the working
/// directory.
pub fn compare<'a>(
    path: impl AsRef<Path>,
    actual: impl Into<Actual<'a>>,
    opts: &CompareOptions,
    update: bool,
) -> Result<()> {
    let path = store::resolve(path)?;
    let actual = actual.into();

    let serialized = serialize(&actual, opts.serialize_as_structured)?;
    tracing::debug!(
        path = %path.display(),
        input = actual.variant_name(),
        bytes = serialized.len(),
        "serialized"
    );

    if update {
        let normalized = normalize_bytes_with(&serialized, opts)?;
        store::write(&path, &normalized)?;
        tracing::debug!(path = %path.display(), "reference updated");
    }

    let reference = store::read(&path)?;
    tracing::debug!(path = %path.display(), bytes = reference.len(), "reference loaded");

    let expected = normalize_bytes_with(&reference, opts)?;
    let actual_normalized = normalize_bytes_with(&serialized, opts)?;
    tracing::trace!(
        uuid_agnostic = opts.uuid_agnostic,
        datetime_agnostic = opts.datetime_agnostic,
        "normalized"
    );

    if expected == actual_normalized {
        tracing::debug!(path = %path.display(), "compared: match");
        return Ok(());
    }

    let (expected, actual_normalized) = diff_texts(&expected, &actual_normalized);
    let diff = TextDiff::compute(
        &expected,
        &actual_normalized,
        opts.granularity.unwrap_or_default(),
    );
    let stats = diff.stats();
    tracing::debug!(
        path = %path.display(),
        inserted = stats.inserted,
        deleted = stats.deleted,
        "compared: mismatch"
    );
    Err(GoldenError::Mismatch { path, diff })
}

/// Decode both sides for display. When lossy decoding would hide the
/// difference, both sides are shown with non-ASCII bytes escaped instead.
fn diff_texts(expected: &[u8], actual: &[u8]) -> (String, String) {
    let (lossy_expected, lossy_actual) = (
        String::from_utf8_lossy(expected),
        String::from_utf8_lossy(actual),
    );
    if lossy_expected == lossy_actual {
        return (
            expected.escape_ascii().to_string(),
            actual.escape_ascii().to_string(),
        );
    }
    (lossy_expected.into_owned(), lossy_actual.into_owned())
}

// ---------------------------------------------------------------------------
// Comparator
// ---------------------------------------------------------------------------

/// A [`compare`] bound to a loaded [`GoldenConfig`]: update mode, path root
/// and default diff granularity come from the config.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: GoldenConfig,
}

impl Comparator {
    pub fn new(config: GoldenConfig) -> Self {
        Self { config }
    }

    /// Load the config from the working directory and environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GoldenConfig::load()?))
    }

    pub fn config(&self) -> &GoldenConfig {
        &self.config
    }

    pub fn is_updating(&self) -> bool {
        self.config.update
    }

    /// Compare against `path` resolved under the configured root.
    ///
    /// `opts.granularity` wins over the configured granularity when set.
    pub fn compare<'a>(
        &self,
        path: impl AsRef<Path>,
        actual: impl Into<Actual<'a>>,
        opts: &CompareOptions,
    ) -> Result<()> {
        let opts = CompareOptions {
            granularity: opts.granularity.or(Some(self.config.diff.granularity)),
            ..*opts
        };
        compare(self.config.resolve(path), actual, &opts, self.config.update)
    }
}

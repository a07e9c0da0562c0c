//! Error types for goldfile comparisons.
//!
//! Every failure aborts the whole comparison; there are no retries and no
//! degraded modes. Messages always name the absolute golden file path where
//! one is involved.

use std::path::PathBuf;

use thiserror::Error;

use crate::diff::TextDiff;

/// Main error type for goldfile operations.
#[derive(Debug, Error)]
pub enum GoldenError {
    /// The actual value could not be marshalled to JSON.
    #[error("failed to marshal actual object: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The actual value has no text form under the chosen options.
    #[error(
        "don't know how to convert {variant} to text \
         (consider enabling serialize_as_structured)"
    )]
    UnsupportedType { variant: &'static str },

    /// Text matched the UUID shape but did not parse as a UUID.
    #[error("failed to parse UUID {text:?}: {source}")]
    MalformedUuid {
        text: String,
        #[source]
        source: uuid::Error,
    },

    /// The golden file does not exist.
    #[error("failed to read golden file {path:?}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem failure.
    #[error("failed to {op} {path:?}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Normalized actual output and golden file differ.
    #[error("mismatch of actual output and golden-file {path:?}:\n{diff}")]
    Mismatch { path: PathBuf, diff: TextDiff },

    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GoldenError {
    /// Whether this error reports a golden file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GoldenError::NotFound { .. })
    }

    /// Whether this error reports differing content.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, GoldenError::Mismatch { .. })
    }
}

/// Result type alias using [`GoldenError`].
pub type Result<T> = std::result::Result<T, GoldenError>;

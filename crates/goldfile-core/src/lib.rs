//! goldfile-core: golden-file comparison engine.
//!
//! This crate holds everything with algorithmic content: turning an actual
//! value into canonical text, finding volatile values (UUIDs, timestamps),
//! replacing them with stable placeholders, and diffing the result against a
//! stored reference file.
//!
//! # Pipeline
//!
//! ```text
//! Actual ──► Serializer ──┬──► (update) Normalizer ──► Store::write
//!                         │
//!                         └──► Normalizer ──┐
//! Store::read ──────────────► Normalizer ──┴──► Comparator ──► Pass | Mismatch(diff)
//! ```
//!
//! Everything is synchronous. Comparisons against distinct golden files share
//! no state and can run in parallel.

pub mod comparator;
pub mod config;
pub mod diff;
pub mod error;
pub mod normalizer;
pub mod patterns;
pub mod serializer;
pub mod store;
pub mod types;

pub use comparator::{compare, Comparator};
pub use config::GoldenConfig;
pub use diff::{DiffGranularity, DiffOp, DiffSpan, DiffStats, TextDiff};
pub use error::{GoldenError, Result};
pub use normalizer::{
    normalize, normalize_bytes, normalize_bytes_with, normalize_with, uuid_placeholder,
    PlaceholderMapping,
};
pub use patterns::find;
pub use types::{Actual, CompareOptions, StructuredValue, VolatileClass, VolatileKind, VolatileValue};

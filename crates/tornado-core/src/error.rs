// File: crates/tornado-core/src/error.rs
// Summary: Typed validation errors for dataset construction.

use thiserror::Error;

/// Rejections raised while building a [`crate::Dataset`] from raw records.
///
/// Rendering-side failures (surface creation, PNG encode) are reported via
/// `anyhow` instead; these cover the data contract only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("dataset contains no rows")]
    Empty,

    /// All rows share one accuracy value, so the color normalization
    /// `(a - min) / (max - min)` has no defined result. A single-row dataset
    /// always lands here.
    #[error("accuracy range is degenerate: every row has accuracy {value}")]
    DegenerateAccuracy { value: f64 },

    #[error("record '{item}': field '{field}' is not a finite number")]
    NonFinite { item: String, field: &'static str },

    #[error("record '{item}': field '{field}' must be non-negative")]
    NegativeVolume { item: String, field: &'static str },
}

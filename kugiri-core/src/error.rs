//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors; segmentation itself never fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A boundary list violated the partition invariants
    #[error("invalid boundary set: {0}")]
    InvalidBoundaries(String),

    /// A granularity string outside grapheme/word/sentence
    #[error("unknown granularity: {0}")]
    UnknownGranularity(String),
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

//! Error types for the hexagram engine.

use std::path::PathBuf;

/// Errors that can occur in engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A hexagram ordinal outside 1..=64 was requested.
    #[error("hexagram ordinal {0} is out of range (expected 1-64)")]
    OutOfRangeOrdinal(i64),

    /// The reference data file could not be read or parsed.
    #[error("reference data unavailable at {}: {reason}", path.display())]
    ReferenceDataUnavailable {
        /// Location of the backing data file.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

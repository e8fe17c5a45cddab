//! # Store Error Types
//!
//! Error types for blob persistence operations.
//!
//! Note that a blob which *reads* fine but fails to parse is not an error
//! at all: the typed loaders in [`crate::snapshot`] treat it as absent,
//! per the storefront's degrade-to-default policy.

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a snapshot to JSON failed.
    #[error("snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

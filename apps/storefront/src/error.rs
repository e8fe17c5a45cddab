//! # App Error Type
//!
//! Unified error type for manager operations.
//!
//! Only a handful of operations can fail hard: order creation (the one
//! place the system asks its caller to handle a failure), and status
//! transitions under the enforced lifecycle. Everything else reports
//! negative outcomes as plain values.

use thiserror::Error;

use namma_core::CoreError;
use namma_store::StoreError;

/// Errors surfaced by the manager layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// A business rule was violated (empty checkout, illegal transition).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persisting a snapshot failed during an operation that propagates
    /// hard failures (order creation).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A status transition targeted an order id that does not exist.
    #[error("order not found: {0}")]
    OrderNotFound(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

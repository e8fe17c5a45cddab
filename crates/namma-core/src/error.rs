//! # Error Types
//!
//! Domain-specific error types for namma-core.
//!
//! Most storefront operations report expected negative outcomes as plain
//! values (a failed login is `false`, an empty search is an empty view).
//! The variants here are the genuine business-rule violations.

use thiserror::Error;

use crate::types::OrderStatus;

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Checkout was attempted against an empty cart snapshot.
    #[error("cannot create an order from an empty cart")]
    EmptyCart,

    /// An order status change that the lifecycle does not allow.
    ///
    /// ## When This Occurs
    /// - Skipping a stage (e.g. `pending` straight to `completed`)
    /// - Moving out of a terminal status (`completed`, `rejected`)
    /// - "Transitioning" to the current status
    #[error("illegal order status transition: {from:?} -> {to:?}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

//! Backend error types.

use thiserror::Error;

use tiffin_core::{OrderId, TransitionError};

/// Errors reported by the backing stores.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The referenced order does not exist.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    /// The requested status change is illegal from the order's current
    /// status. The order is left exactly as it was.
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    /// A uniqueness constraint was violated (e.g. duplicate account email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing service could not be reached or failed unexpectedly.
    /// Callers must surface this and leave local state untouched; it is
    /// never an implicit success.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

//! Unified error handling for the admin API.
//!
//! A rejected status transition is an expected outcome of concurrent staff
//! action, not a server fault: it maps to `409 Conflict` and the body names
//! the status the order actually held, so the client can refresh its view
//! instead of retrying blindly.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use tiffin_backend::BackendError;

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend collaborator reported a failure.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or wrong admin token.
    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Backend(BackendError::InvalidTransition(err)) => (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": err.to_string(),
                    "from": err.from,
                    "requested": err.requested,
                })),
            )
                .into_response(),
            Self::Backend(BackendError::OrderNotFound(id)) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("order {id} not found") })),
            )
                .into_response(),
            Self::Backend(BackendError::Conflict(msg)) => {
                (StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
            }
            Self::Backend(err @ BackendError::Unavailable(_)) => {
                tracing::error!(error = %err, "Backend unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": "Service temporarily unavailable, please retry" })),
                )
                    .into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiffin_core::{OrderStatus, TransitionError};

    #[test]
    fn test_invalid_transition_is_conflict() {
        let err = AppError::Backend(BackendError::InvalidTransition(TransitionError {
            from: OrderStatus::Rejected,
            requested: OrderStatus::Accepted,
        }));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unknown_order_is_not_found() {
        let err = AppError::Backend(BackendError::OrderNotFound(tiffin_core::OrderId::new()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}

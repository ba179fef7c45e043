//! Order-management route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use tiffin_backend::OrderFilter;
use tiffin_core::{OrderId, OrderStatus};

use crate::error::AppError;
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// Query parameters for the order list.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Restrict to a single status, e.g. `?status=pending`.
    pub status: Option<String>,
}

/// Status-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// The requested status; `pending` is never accepted.
    pub status: OrderStatus,
}

/// List orders, newest first, optionally filtered by status.
#[instrument(skip_all, fields(status = query.status.as_deref()))]
pub async fn list(
    _: RequireStaff,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut filter = OrderFilter::all();
    if let Some(raw) = &query.status {
        let status: OrderStatus = raw.parse().map_err(AppError::BadRequest)?;
        filter = filter.with_status(status);
    }

    Ok(Json(state.backend().orders().list(&filter)))
}

/// Fetch a single order.
#[instrument(skip_all, fields(order_id = %id))]
pub async fn get(
    _: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.backend().orders().get(id)?))
}

/// Request a status transition for an order.
///
/// The backend validates against the order's current persisted status; a
/// losing concurrent request gets `409 Conflict` naming that status.
#[instrument(skip_all, fields(order_id = %id, requested = %req.status))]
pub async fn update_status(
    _: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order = state.backend().orders().update_status(id, req.status)?;
    Ok(Json(order))
}

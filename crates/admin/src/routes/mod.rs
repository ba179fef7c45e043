//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check (no token required)
//! GET  /dashboard               - Revenue and order figures
//! GET  /orders                  - All orders, newest first (?status= filter)
//! GET  /orders/{id}             - Single order
//! POST /orders/{id}/status      - Request a status transition
//! ```

pub mod dashboard;
pub mod orders;

use axum::{
    Json,
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::state::AppState;

/// Assemble the full admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/dashboard", get(dashboard::show))
        .route("/orders", get(orders::list))
        .route("/orders/{id}", get(orders::get))
        .route("/orders/{id}/status", post(orders::update_status))
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

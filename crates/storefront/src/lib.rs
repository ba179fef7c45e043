//! Tiffin Storefront library.
//!
//! This crate provides the customer-facing API as a library, allowing it to
//! be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the storefront application over the given state.
///
/// Includes the session layer and request tracing; callers add transport.
#[must_use]
pub fn app(state: state::AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    routes::router()
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

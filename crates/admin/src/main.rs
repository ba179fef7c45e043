//! Tiffin Admin - staff order-management API.
//!
//! This binary serves the staff API on port 3001 and is meant to be
//! reachable only on the internal network.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON
//! - Static bearer-token auth from the environment
//! - The in-process backend for the order collection
//!
//! Status transitions are validated by the backend against the order's
//! current persisted status, so two staff members acting on the same order
//! at once resolve to one winner and one `409 Conflict`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tiffin_admin::config::AdminConfig;
use tiffin_admin::state::AppState;
use tiffin_backend::Backend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment from .env if present
    let _ = dotenvy::dotenv();

    // Initialize tracing with EnvFilter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tiffin_admin=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AdminConfig::from_env().expect("Failed to load configuration");

    let backend = Backend::new();
    let state = AppState::new(config.clone(), backend);

    let app = tiffin_admin::app(state);

    let addr = config.socket_addr();
    tracing::info!("admin listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

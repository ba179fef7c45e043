//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Service info (redirect target for the gate)
//! GET  /health                  - Health check
//!
//! # Auth
//! GET  /auth/login              - Login form descriptor
//! POST /auth/login              - Login action
//! POST /auth/register           - Register action
//! POST /auth/logout             - Logout action (drops cart and favorites)
//!
//! # Cart (requires complete profile)
//! GET  /cart                    - Current cart with totals
//! POST /cart/add                - Add one unit of an item
//! POST /cart/update             - Set an item's quantity
//! POST /cart/remove             - Remove an item
//!
//! # Favorites (requires complete profile)
//! GET  /favorites               - Current favorites
//! POST /favorites/toggle        - Toggle an item's membership
//!
//! # Account
//! GET  /account/profile         - Profile with completeness state
//! GET  /account/complete-profile  - Completion state (gated)
//! POST /account/complete-profile  - Record the missing fields
//!
//! # Orders (requires complete profile)
//! POST /checkout                - Submit the cart as an order
//! GET  /orders                  - The customer's orders, newest first
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod favorites;
pub mod orders;

use axum::{
    Json,
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_form).post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::show))
        .route("/toggle", post(favorites::toggle))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(account::profile))
        .route(
            "/complete-profile",
            get(account::completion_form).post(account::complete_profile),
        )
}

/// Assemble the full storefront router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/checkout", post(orders::checkout))
        .route("/orders", get(orders::list))
        .nest("/auth", auth_routes())
        .nest("/cart", cart_routes())
        .nest("/favorites", favorites_routes())
        .nest("/account", account_routes())
}

/// Service info; the gate's home redirect target.
async fn home() -> impl IntoResponse {
    Json(json!({ "service": "tiffin-storefront" }))
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Login form descriptor; the gate's login redirect target.
async fn login_form() -> impl IntoResponse {
    Json(json!({ "fields": ["email", "password"] }))
}

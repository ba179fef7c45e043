//! Checkout and order-history route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use tower_sessions::Session;
use tracing::instrument;

use tiffin_backend::OrderFilter;
use tiffin_core::Cart;

use crate::error::AppError;
use crate::middleware::CompleteCustomer;
use crate::models::session::{load_cart, save_cart};
use crate::state::AppState;

/// Submit the cart as a new order.
///
/// The cart snapshot goes to the backend first; the session cart is cleared
/// only after the backend confirms the order, so a failed submission leaves
/// the cart intact for an explicit retry.
#[instrument(skip_all)]
pub async fn checkout(
    CompleteCustomer(customer): CompleteCustomer,
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let cart = load_cart(&session).await?;

    let order = state
        .backend()
        .orders()
        .create(customer.id, cart.into_items(), Utc::now())?;

    save_cart(&session, &Cart::new()).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// List the signed-in customer's orders, newest first.
#[instrument(skip_all)]
pub async fn list(
    CompleteCustomer(customer): CompleteCustomer,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let orders = state
        .backend()
        .orders()
        .list(&OrderFilter::all().with_customer(customer.id));
    Ok(Json(orders))
}

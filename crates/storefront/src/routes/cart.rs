//! Cart route handlers.
//!
//! The cart lives in the session. Every mutation loads the snapshot, applies
//! one operation, saves it back, and returns the recomputed money figures so
//! the client never totals prices itself.

use axum::{Json, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use tiffin_core::{Cart, Discount, ItemKey, LineItem};

use crate::error::AppError;
use crate::middleware::CompleteCustomer;
use crate::models::session::{load_cart, save_cart};

/// Cart representation returned by every cart endpoint.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    /// Line items, sorted by item key.
    pub items: Vec<LineItem>,
    /// Total units across all line items.
    pub unit_count: u32,
    /// Sum of discounted line totals.
    pub subtotal: Decimal,
    /// Tax on the subtotal.
    pub tax: Decimal,
    /// Subtotal plus tax.
    pub total: Decimal,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            unit_count: cart.unit_count(),
            subtotal: cart.subtotal(),
            tax: cart.tax(),
            total: cart.total(),
            items: cart.items().cloned().collect(),
        }
    }
}

/// Add-to-cart request body.
///
/// Carries no quantity on purpose: adding always contributes one unit.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// Composite item identity.
    #[serde(flatten)]
    pub key: ItemKey,
    /// Display name of the item.
    pub name: String,
    /// Undiscounted unit price.
    pub unit_price: Decimal,
    /// Optional discount.
    #[serde(default, flatten)]
    pub discount: Option<Discount>,
}

/// Quantity-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    /// Composite item identity.
    #[serde(flatten)]
    pub key: ItemKey,
    /// New quantity; must be at least 1.
    pub quantity: u32,
}

/// Remove-item request body.
#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    /// Composite item identity.
    #[serde(flatten)]
    pub key: ItemKey,
}

/// Return the current cart.
#[instrument(skip_all)]
pub async fn show(
    CompleteCustomer(_customer): CompleteCustomer,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartResponse::from(&cart)))
}

/// Add one unit of an item to the cart.
#[instrument(skip_all, fields(item = %req.key))]
pub async fn add(
    CompleteCustomer(_customer): CompleteCustomer,
    session: Session,
    Json(req): Json<AddItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut cart = load_cart(&session).await?;
    cart.add_item(LineItem {
        key: req.key,
        name: req.name,
        unit_price: req.unit_price,
        quantity: 1,
        discount: req.discount,
    });
    save_cart(&session, &cart).await?;
    Ok(Json(CartResponse::from(&cart)))
}

/// Set an item's quantity.
#[instrument(skip_all, fields(item = %req.key, quantity = req.quantity))]
pub async fn update(
    CompleteCustomer(_customer): CompleteCustomer,
    session: Session,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut cart = load_cart(&session).await?;
    cart.update_quantity(&req.key, req.quantity)?;
    save_cart(&session, &cart).await?;
    Ok(Json(CartResponse::from(&cart)))
}

/// Remove an item from the cart.
#[instrument(skip_all, fields(item = %req.key))]
pub async fn remove(
    CompleteCustomer(_customer): CompleteCustomer,
    session: Session,
    Json(req): Json<RemoveItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut cart = load_cart(&session).await?;
    cart.remove_item(&req.key);
    save_cart(&session, &cart).await?;
    Ok(Json(CartResponse::from(&cart)))
}

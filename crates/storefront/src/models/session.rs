//! Session-related types.
//!
//! Types stored in the session for authentication state, plus helpers for
//! the cart and favorites snapshots that live alongside them. Cart and
//! favorites are session-scoped: signing out discards the session record
//! and both collections with it.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use tiffin_core::{Cart, CustomerId, Email, Favorites};

use crate::error::AppError;

/// Session-stored customer identity.
///
/// Minimal data stored in the session to identify the logged-in customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentCustomer {
    /// Customer's account ID.
    pub id: CustomerId,
    /// Customer's email address.
    pub email: Email,
}

/// Session keys for authentication and lifecycle data.
pub mod keys {
    /// Key for storing the current logged-in customer.
    pub const CURRENT_CUSTOMER: &str = "current_customer";

    /// Key for the customer's cart snapshot.
    pub const CART: &str = "cart";

    /// Key for the customer's favorites snapshot.
    pub const FAVORITES: &str = "favorites";
}

/// Stores the current customer in the session.
pub async fn set_current_customer(
    session: &Session,
    customer: &CurrentCustomer,
) -> Result<(), AppError> {
    session.insert(keys::CURRENT_CUSTOMER, customer).await?;
    Ok(())
}

/// Loads the cart from the session, falling back to an empty cart.
pub async fn load_cart(session: &Session) -> Result<Cart, AppError> {
    Ok(session.get(keys::CART).await?.unwrap_or_default())
}

/// Persists the cart back into the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<(), AppError> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Loads the favorites set from the session, falling back to empty.
pub async fn load_favorites(session: &Session) -> Result<Favorites, AppError> {
    Ok(session.get(keys::FAVORITES).await?.unwrap_or_default())
}

/// Persists the favorites set back into the session.
pub async fn save_favorites(session: &Session, favorites: &Favorites) -> Result<(), AppError> {
    session.insert(keys::FAVORITES, favorites).await?;
    Ok(())
}

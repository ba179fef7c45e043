//! Favorites route handlers.
//!
//! Favorites share the session-snapshot discipline of the cart: load,
//! toggle, save, return the new state.

use axum::{Json, response::IntoResponse};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use tiffin_core::{FavoriteItem, Favorites};

use crate::error::AppError;
use crate::middleware::CompleteCustomer;
use crate::models::session::{load_favorites, save_favorites};

/// Favorites representation returned by both endpoints.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    /// Favorite items, sorted by item key.
    pub items: Vec<FavoriteItem>,
    /// Number of favorites.
    pub count: usize,
}

impl From<&Favorites> for FavoritesResponse {
    fn from(favorites: &Favorites) -> Self {
        Self {
            count: favorites.len(),
            items: favorites.items().cloned().collect(),
        }
    }
}

/// Toggle response: the new membership plus the whole set.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// Whether the item is a favorite after the call.
    pub favorited: bool,
    /// The favorites set after the call.
    #[serde(flatten)]
    pub favorites: FavoritesResponse,
}

/// Return the current favorites.
#[instrument(skip_all)]
pub async fn show(
    CompleteCustomer(_customer): CompleteCustomer,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let favorites = load_favorites(&session).await?;
    Ok(Json(FavoritesResponse::from(&favorites)))
}

/// Toggle an item's favorite membership.
#[instrument(skip_all, fields(item = %item.key))]
pub async fn toggle(
    CompleteCustomer(_customer): CompleteCustomer,
    session: Session,
    Json(item): Json<FavoriteItem>,
) -> Result<impl IntoResponse, AppError> {
    let mut favorites = load_favorites(&session).await?;
    let favorited = favorites.toggle(item);
    save_favorites(&session, &favorites).await?;
    Ok(Json(ToggleResponse {
        favorited,
        favorites: FavoritesResponse::from(&favorites),
    }))
}

//! The customer's liked-item set.
//!
//! Favorites use the same composite [`ItemKey`] identity as the cart and the
//! same serde discipline: stored as a sequence, rejecting duplicate keys on
//! the way back in.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::ItemKey;

/// A liked catalog item, independent of purchase intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    /// Composite item identity.
    #[serde(flatten)]
    pub key: ItemKey,
    /// Display name of the item.
    pub name: String,
    /// Undiscounted unit price.
    pub unit_price: Decimal,
    /// Image URL for display.
    pub image: String,
}

/// Error from deserializing a stored favorites set.
#[derive(Debug, Clone, thiserror::Error)]
#[error("duplicate favorite entry for item {0}")]
pub struct DuplicateFavorite(pub ItemKey);

/// The favorites set, keyed by [`ItemKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<FavoriteItem>", try_from = "Vec<FavoriteItem>")]
pub struct Favorites {
    items: BTreeMap<ItemKey, FavoriteItem>,
}

impl Favorites {
    /// Create an empty favorites set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an item's membership.
    ///
    /// Removes the item if its key is present, inserts it otherwise. Applying
    /// the toggle twice with the same item restores the original membership.
    /// Returns `true` if the item is a favorite after the call.
    pub fn toggle(&mut self, item: FavoriteItem) -> bool {
        if self.items.remove(&item.key).is_some() {
            false
        } else {
            self.items.insert(item.key.clone(), item);
            true
        }
    }

    /// Whether an item is currently a favorite.
    #[must_use]
    pub fn contains(&self, key: &ItemKey) -> bool {
        self.items.contains_key(key)
    }

    /// Iterate over the favorite items.
    pub fn items(&self) -> impl Iterator<Item = &FavoriteItem> {
        self.items.values()
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Favorites> for Vec<FavoriteItem> {
    fn from(favorites: Favorites) -> Self {
        favorites.items.into_values().collect()
    }
}

impl TryFrom<Vec<FavoriteItem>> for Favorites {
    type Error = DuplicateFavorite;

    fn try_from(items: Vec<FavoriteItem>) -> Result<Self, Self::Error> {
        let mut map = BTreeMap::new();
        for item in items {
            let key = item.key.clone();
            if map.insert(key.clone(), item).is_some() {
                return Err(DuplicateFavorite(key));
            }
        }
        Ok(Self { items: map })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn favorite(id: i64, category: &str) -> FavoriteItem {
        FavoriteItem {
            key: ItemKey::new(ItemId::new(id), category),
            name: format!("item-{id}"),
            unit_price: Decimal::from(100),
            image: format!("/images/{id}.jpg"),
        }
    }

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut favorites = Favorites::new();
        let key = ItemKey::new(ItemId::new(1), "pizza");

        assert!(favorites.toggle(favorite(1, "pizza")));
        assert!(favorites.contains(&key));

        assert!(!favorites.toggle(favorite(1, "pizza")));
        assert!(!favorites.contains(&key));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut favorites = Favorites::new();
        favorites.toggle(favorite(2, "burger"));
        let before = favorites.clone();

        favorites.toggle(favorite(1, "pizza"));
        favorites.toggle(favorite(1, "pizza"));
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_category_is_part_of_identity() {
        let mut favorites = Favorites::new();
        favorites.toggle(favorite(1, "pizza"));
        favorites.toggle(favorite(1, "burger"));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut favorites = Favorites::new();
        favorites.toggle(favorite(1, "pizza"));
        favorites.toggle(favorite(2, "burger"));

        let json = serde_json::to_string(&favorites).unwrap();
        let restored: Favorites = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, favorites);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"[
            {"item_id":1,"category":"pizza","name":"m","unit_price":"100","image":"i"},
            {"item_id":1,"category":"pizza","name":"m","unit_price":"100","image":"i"}
        ]"#;
        assert!(serde_json::from_str::<Favorites>(json).is_err());
    }
}

//! The customer's in-progress selection of purchasable line items.
//!
//! A [`Cart`] is owned by a single customer session: created empty at
//! session start, mutated only through the operations here, and discarded at
//! session end. It is a map keyed by [`ItemKey`] - the composite of catalog
//! item id and category - which is the one canonical identity used across
//! cart, favorites, and every lookup path.
//!
//! Quantities are always at least 1. An entry whose quantity would reach
//! zero must be removed instead; a zero-quantity entry is never stored and
//! never accepted from serialized input.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::money::round_money;
use crate::types::{ItemId, tax_rate};

/// Composite identity of a catalog item.
///
/// Some menu categories reuse numeric ids, so identity is the pair of id and
/// category everywhere an item is looked up, updated, or removed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    /// Numeric catalog id.
    pub item_id: ItemId,
    /// Menu category the item belongs to.
    pub category: String,
}

impl ItemKey {
    /// Create a key from an id and category.
    #[must_use]
    pub fn new(item_id: ItemId, category: impl Into<String>) -> Self {
        Self {
            item_id,
            category: category.into(),
        }
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category, self.item_id)
    }
}

/// A discount applied to a line item's unit price.
///
/// At most one discount applies per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "discount_type", content = "discount_value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage off the unit price (e.g. `20` for 20% off).
    Percentage(Decimal),
    /// Fixed amount off the unit price.
    Fixed(Decimal),
}

impl Discount {
    /// Apply this discount to a unit price.
    ///
    /// The effective price never drops below zero; a fixed discount larger
    /// than the unit price clamps to free rather than producing a credit.
    #[must_use]
    pub fn apply(&self, unit_price: Decimal) -> Decimal {
        let discounted = match *self {
            Self::Percentage(percent) => {
                unit_price * (Decimal::ONE - percent / Decimal::ONE_HUNDRED)
            }
            Self::Fixed(amount) => unit_price - amount,
        };
        discounted.max(Decimal::ZERO)
    }
}

/// One catalog item plus quantity and optional discount, as held in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Composite item identity.
    #[serde(flatten)]
    pub key: ItemKey,
    /// Display name of the item.
    pub name: String,
    /// Undiscounted unit price.
    pub unit_price: Decimal,
    /// Number of units; always >= 1 while the entry exists.
    pub quantity: u32,
    /// Optional discount; at most one per item.
    #[serde(default, flatten)]
    pub discount: Option<Discount>,
}

impl LineItem {
    /// Unit price after applying this item's discount, if any.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discount
            .as_ref()
            .map_or(self.unit_price, |d| d.apply(self.unit_price))
    }

    /// Effective price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.effective_price() * Decimal::from(self.quantity)
    }
}

/// Errors from cart operations and from deserializing stored carts.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CartError {
    /// A quantity of zero was requested; callers must remove instead.
    #[error("quantity must be at least 1; remove the item instead")]
    ZeroQuantity,
    /// The referenced item is not in the cart.
    #[error("item {0} is not in the cart")]
    UnknownItem(ItemKey),
    /// Serialized cart data contained the same item key twice.
    #[error("duplicate cart entry for item {0}")]
    DuplicateKey(ItemKey),
}

/// The cart: a map from [`ItemKey`] to [`LineItem`].
///
/// Serializes as a sequence of line items (insertion order is irrelevant);
/// deserialization rejects duplicate keys and zero quantities, so a stored
/// cart can never violate the container invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<LineItem>", try_from = "Vec<LineItem>")]
pub struct Cart {
    items: BTreeMap<ItemKey, LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item.
    ///
    /// If the item's key is already present its quantity is incremented by
    /// one; otherwise the item is inserted with quantity 1. Any quantity on
    /// the argument is ignored.
    pub fn add_item(&mut self, item: LineItem) {
        match self.items.entry(item.key.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().quantity += 1;
            }
            Entry::Vacant(slot) => {
                slot.insert(LineItem {
                    quantity: 1,
                    ..item
                });
            }
        }
    }

    /// Set an item's quantity to `quantity`, which must be at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] for a zero request (callers
    /// decrementing to zero must call [`Cart::remove_item`]) and
    /// [`CartError::UnknownItem`] if the key is not present.
    pub fn update_quantity(&mut self, key: &ItemKey, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        let item = self
            .items
            .get_mut(key)
            .ok_or_else(|| CartError::UnknownItem(key.clone()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove an item unconditionally. Removing an absent key is a no-op.
    pub fn remove_item(&mut self, key: &ItemKey) {
        self.items.remove(key);
    }

    /// Look up an item by key.
    #[must_use]
    pub fn get(&self, key: &ItemKey) -> Option<&LineItem> {
        self.items.get(key)
    }

    /// Iterate over the line items.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.values().map(|i| i.quantity).sum()
    }

    /// Sum of effective price times quantity over all entries, rounded to
    /// two decimal places.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        round_money(self.items.values().map(LineItem::line_total).sum())
    }

    /// Tax derived from the subtotal (5%).
    #[must_use]
    pub fn tax(&self) -> Decimal {
        round_money(self.subtotal() * tax_rate())
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.tax()
    }

    /// Consume the cart, yielding its line items for an order snapshot.
    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.items.into_values().collect()
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items.into_values().collect()
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        let mut map = BTreeMap::new();
        for item in items {
            if item.quantity == 0 {
                return Err(CartError::ZeroQuantity);
            }
            let key = item.key.clone();
            if map.insert(key.clone(), item).is_some() {
                return Err(CartError::DuplicateKey(key));
            }
        }
        Ok(Self { items: map })
    }
}

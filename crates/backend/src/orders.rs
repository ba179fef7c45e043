//! Order store with compare-and-swap status transitions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use tiffin_core::{CustomerId, EmptyOrder, LineItem, Order, OrderId, OrderStatus};

use crate::error::BackendError;

/// Filter for [`OrderStore::list`].
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    status: Option<OrderStatus>,
    customer_id: Option<CustomerId>,
}

impl OrderFilter {
    /// Match all orders.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            status: None,
            customer_id: None,
        }
    }

    /// Restrict to a single status.
    #[must_use]
    pub const fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to a single customer.
    #[must_use]
    pub const fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|s| order.status == s)
            && self.customer_id.is_none_or(|c| order.customer_id == c)
    }
}

/// The order collection.
///
/// Each order sits behind its own mutex; the outer map lock is held only
/// long enough to find the entry, never across a status mutation, so
/// transitions on different orders do not contend.
#[derive(Default)]
pub struct OrderStore {
    orders: RwLock<HashMap<OrderId, Arc<Mutex<Order>>>>,
}

impl OrderStore {
    /// Create an order from a cart snapshot with status `pending`.
    ///
    /// Subtotal, tax, and total are computed server-side from the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOrder`] if the snapshot holds no items.
    pub fn create(
        &self,
        customer_id: CustomerId,
        items: Vec<LineItem>,
        now: DateTime<Utc>,
    ) -> Result<Order, EmptyOrder> {
        let order = Order::place(customer_id, items, now)?;
        tracing::info!(order_id = %order.id, customer_id = %customer_id, total = %order.total, "order created");

        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(order.id, Arc::new(Mutex::new(order.clone())));

        Ok(order)
    }

    /// Fetch a single order.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::OrderNotFound`] if the id is unknown.
    pub fn get(&self, id: OrderId) -> Result<Order, BackendError> {
        let entry = self.entry(id)?;
        let order = entry.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(order.clone())
    }

    /// Snapshot the orders matching `filter`, newest first.
    #[must_use]
    pub fn list(&self, filter: &OrderFilter) -> Vec<Order> {
        let entries: Vec<_> = self
            .orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        let mut orders: Vec<Order> = entries
            .iter()
            .map(|entry| entry.lock().unwrap_or_else(PoisonError::into_inner).clone())
            .filter(|order| filter.matches(order))
            .collect();

        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Request a status transition, validated against the order's current
    /// persisted status under its per-order lock.
    ///
    /// Returns the order as stored after the call: transitioned on success.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::OrderNotFound`] for an unknown id and
    /// [`BackendError::InvalidTransition`] for an illegal request, in which
    /// case the stored order is unchanged.
    pub fn update_status(
        &self,
        id: OrderId,
        requested: OrderStatus,
    ) -> Result<Order, BackendError> {
        let entry = self.entry(id)?;
        let mut order = entry.lock().unwrap_or_else(PoisonError::into_inner);

        match order.apply_transition(requested) {
            Ok(()) => {
                tracing::info!(order_id = %id, status = %requested, "order transitioned");
                Ok(order.clone())
            }
            Err(err) => {
                tracing::warn!(order_id = %id, %err, "transition rejected");
                Err(err.into())
            }
        }
    }

    fn entry(&self, id: OrderId) -> Result<Arc<Mutex<Order>>, BackendError> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(BackendError::OrderNotFound(id))
    }
}

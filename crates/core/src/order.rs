//! Orders and the fulfillment status state machine.
//!
//! An [`Order`] is created once at checkout: its items and money figures are
//! a snapshot, immutable thereafter. Only [`OrderStatus`] mutates, and only
//! along the legal edges:
//!
//! ```text
//! pending -> accepted -> preparing -> completed
//! pending -> rejected
//! ```
//!
//! `rejected` and `completed` are terminal. Every other requested transition
//! fails with [`TransitionError`] and leaves the order unchanged.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::types::money::round_money;
use crate::types::{CustomerId, OrderId, tax_rate};

/// The order's position in the fulfillment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Newly created, awaiting staff review.
    #[default]
    Pending,
    /// Accepted by staff.
    Accepted,
    /// Rejected by staff (terminal).
    Rejected,
    /// In the kitchen.
    Preparing,
    /// Fulfilled (terminal).
    Completed,
}

impl OrderStatus {
    /// Whether no further transition can leave this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }

    /// The only status an order may be in for a transition *to* `self` to be
    /// legal, or `None` if `self` is never a legal transition target
    /// (`pending` is assigned at creation, never requested).
    #[must_use]
    pub const fn required_predecessor(self) -> Option<Self> {
        match self {
            Self::Pending => None,
            Self::Accepted | Self::Rejected => Some(Self::Pending),
            Self::Preparing => Some(Self::Accepted),
            Self::Completed => Some(Self::Preparing),
        }
    }

    /// Whether a single transition from `self` to `next` is legal.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        next.required_predecessor() == Some(self)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Preparing => "preparing",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "preparing" => Ok(Self::Preparing),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// An illegal status transition was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("illegal order transition from {from} to {requested}")]
pub struct TransitionError {
    /// The order's status at the time the request was validated.
    pub from: OrderStatus,
    /// The status the caller asked for.
    pub requested: OrderStatus,
}

/// An order cannot be placed without items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot place an order with no items")]
pub struct EmptyOrder;

/// An immutable-items, mutable-status record created at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order id.
    pub id: OrderId,
    /// The customer who placed the order.
    pub customer_id: CustomerId,
    /// Cart snapshot taken at submission time; immutable.
    pub items: Vec<LineItem>,
    /// Item subtotal at submission time.
    pub subtotal: Decimal,
    /// Tax at submission time.
    pub tax: Decimal,
    /// Subtotal plus tax.
    pub total: Decimal,
    /// Current fulfillment status; the only mutable field.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending order from a cart snapshot.
    ///
    /// Subtotal, tax, and total are computed here from the snapshot with the
    /// same formulas the cart uses, so a stale client-side figure can never
    /// leak into the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOrder`] if the snapshot holds no items.
    pub fn place(
        customer_id: CustomerId,
        items: Vec<LineItem>,
        now: DateTime<Utc>,
    ) -> Result<Self, EmptyOrder> {
        if items.is_empty() {
            return Err(EmptyOrder);
        }

        let subtotal = round_money(items.iter().map(LineItem::line_total).sum());
        let tax = round_money(subtotal * tax_rate());

        Ok(Self {
            id: OrderId::new(),
            customer_id,
            items,
            subtotal,
            tax,
            total: subtotal + tax,
            status: OrderStatus::Pending,
            created_at: now,
        })
    }

    /// Apply a requested status transition, validating against the order's
    /// current status.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] for any illegal request; the order is
    /// left unchanged.
    pub fn apply_transition(&mut self, requested: OrderStatus) -> Result<(), TransitionError> {
        if self.status.can_transition_to(requested) {
            self.status = requested;
            Ok(())
        } else {
            Err(TransitionError {
                from: self.status,
                requested,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::{Discount, ItemKey};
    use crate::types::ItemId;

    fn line_item(id: i64, price: i64, quantity: u32) -> LineItem {
        LineItem {
            key: ItemKey::new(ItemId::new(id), "pizza"),
            name: format!("item-{id}"),
            unit_price: Decimal::from(price),
            quantity,
            discount: None,
        }
    }

    #[test]
    fn test_single_step_reachability() {
        use OrderStatus::{Accepted, Completed, Pending, Preparing, Rejected};
        let all = [Pending, Accepted, Rejected, Preparing, Completed];

        for next in all {
            assert_eq!(
                Pending.can_transition_to(next),
                matches!(next, Accepted | Rejected),
                "pending -> {next}"
            );
            assert_eq!(
                Accepted.can_transition_to(next),
                matches!(next, Preparing),
                "accepted -> {next}"
            );
            assert_eq!(
                Preparing.can_transition_to(next),
                matches!(next, Completed),
                "preparing -> {next}"
            );
            // Terminal states reach nothing.
            assert!(!Rejected.can_transition_to(next));
            assert!(!Completed.can_transition_to(next));
        }
    }

    #[test]
    fn test_pending_is_never_a_target() {
        assert_eq!(OrderStatus::Pending.required_predecessor(), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Accepted.is_terminal());
        assert!(!OrderStatus::Preparing.is_terminal());
    }

    #[test]
    fn test_status_display_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Rejected,
            OrderStatus::Preparing,
            OrderStatus::Completed,
        ] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_place_computes_totals() {
        let mut discounted = line_item(1, 100, 3);
        discounted.discount = Some(Discount::Percentage(Decimal::from(20)));
        let order = Order::place(CustomerId::new(), vec![discounted], Utc::now()).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.subtotal, Decimal::from(240));
        assert_eq!(order.tax, Decimal::from(12));
        assert_eq!(order.total, Decimal::from(252));
    }

    #[test]
    fn test_place_rejects_empty_snapshot() {
        assert!(Order::place(CustomerId::new(), vec![], Utc::now()).is_err());
    }

    #[test]
    fn test_apply_transition_walks_happy_path() {
        let mut order =
            Order::place(CustomerId::new(), vec![line_item(1, 100, 1)], Utc::now()).unwrap();

        order.apply_transition(OrderStatus::Accepted).unwrap();
        order.apply_transition(OrderStatus::Preparing).unwrap();
        order.apply_transition(OrderStatus::Completed).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_illegal_transition_leaves_order_unchanged() {
        let mut order =
            Order::place(CustomerId::new(), vec![line_item(1, 100, 1)], Utc::now()).unwrap();

        let err = order.apply_transition(OrderStatus::Completed).unwrap_err();
        assert_eq!(err.from, OrderStatus::Pending);
        assert_eq!(err.requested, OrderStatus::Completed);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_terminal_order_rejects_everything() {
        let mut order =
            Order::place(CustomerId::new(), vec![line_item(1, 100, 1)], Utc::now()).unwrap();
        order.apply_transition(OrderStatus::Rejected).unwrap();

        for requested in [
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Preparing,
            OrderStatus::Completed,
        ] {
            assert!(order.apply_transition(requested).is_err());
            assert_eq!(order.status, OrderStatus::Rejected);
        }
    }
}

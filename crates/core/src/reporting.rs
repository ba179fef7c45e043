//! Reporting figures derived from an order collection snapshot.
//!
//! [`revenue_report`] is a pure function: identical input always yields an
//! identical report, and it holds no locks and keeps no state between
//! invocations. Callers take a snapshot of the order collection first and
//! pass `now` explicitly.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::{Order, OrderStatus};
use crate::types::money::round_money;

/// Aggregated figures for the administrative dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReport {
    /// Completed-order revenue created within the last day.
    pub daily_revenue: Decimal,
    /// Completed-order revenue created within the last 7 days.
    pub weekly_revenue: Decimal,
    /// Completed-order revenue created within the last 30 days.
    pub monthly_revenue: Decimal,
    /// Count of all orders, any status, any age.
    pub total_orders: usize,
    /// Count of pending orders over the full collection.
    pub pending_count: usize,
    /// Count of completed orders over the full collection.
    pub completed_count: usize,
    /// Number of distinct customers across all orders.
    pub active_users: usize,
}

/// Compute the report from an order collection snapshot.
///
/// Revenue sums `total` only over orders with status `completed`, windowed
/// by `created_at` relative to `now`. The status counts and active-user
/// count cover the full collection regardless of age.
#[must_use]
pub fn revenue_report(orders: &[Order], now: DateTime<Utc>) -> RevenueReport {
    let completed_revenue_since = |cutoff: DateTime<Utc>| {
        round_money(
            orders
                .iter()
                .filter(|o| o.status == OrderStatus::Completed)
                .filter(|o| o.created_at > cutoff && o.created_at <= now)
                .map(|o| o.total)
                .sum(),
        )
    };

    let mut customers: Vec<_> = orders.iter().map(|o| o.customer_id).collect();
    customers.sort_unstable();
    customers.dedup();

    RevenueReport {
        daily_revenue: completed_revenue_since(now - Duration::days(1)),
        weekly_revenue: completed_revenue_since(now - Duration::days(7)),
        monthly_revenue: completed_revenue_since(now - Duration::days(30)),
        total_orders: orders.len(),
        pending_count: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count(),
        completed_count: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count(),
        active_users: customers.len(),
    }
}

/// Today's revenue growth against the weekly daily average, in percent.
///
/// The naive `daily / (weekly / 7)` ratio degenerates when weekly revenue is
/// zero; that case is defined here as 0% growth.
#[must_use]
pub fn daily_growth_percent(report: &RevenueReport) -> Decimal {
    if report.weekly_revenue.is_zero() {
        // Keep the money scale even on the degenerate branch.
        return round_money(Decimal::ZERO);
    }
    let weekly_daily_average = report.weekly_revenue / Decimal::from(7);
    round_money((report.daily_revenue / weekly_daily_average - Decimal::ONE) * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::{ItemKey, LineItem};
    use crate::types::{CustomerId, ItemId};

    fn order_with(
        customer_id: CustomerId,
        status: OrderStatus,
        total: i64,
        age: Duration,
        now: DateTime<Utc>,
    ) -> Order {
        let mut order = Order::place(
            customer_id,
            vec![LineItem {
                key: ItemKey::new(ItemId::new(1), "pizza"),
                name: "item".to_owned(),
                unit_price: Decimal::from(total),
                quantity: 1,
                discount: None,
            }],
            now - age,
        )
        .unwrap();
        // Fix the figures directly; tax handling is covered by cart tests.
        order.total = Decimal::from(total);
        order.status = status;
        order
    }

    #[test]
    fn test_completed_revenue_and_pending_count() {
        let now = Utc::now();
        let orders = vec![
            order_with(
                CustomerId::new(),
                OrderStatus::Completed,
                100,
                Duration::hours(2),
                now,
            ),
            order_with(
                CustomerId::new(),
                OrderStatus::Pending,
                50,
                Duration::hours(3),
                now,
            ),
        ];

        let report = revenue_report(&orders, now);
        assert_eq!(report.daily_revenue, Decimal::from(100));
        assert_eq!(report.pending_count, 1);
        assert_eq!(report.completed_count, 1);
        assert_eq!(report.total_orders, 2);
    }

    #[test]
    fn test_windows_exclude_older_orders() {
        let now = Utc::now();
        let customer = CustomerId::new();
        let orders = vec![
            order_with(customer, OrderStatus::Completed, 10, Duration::hours(1), now),
            order_with(customer, OrderStatus::Completed, 20, Duration::days(3), now),
            order_with(customer, OrderStatus::Completed, 40, Duration::days(20), now),
            order_with(customer, OrderStatus::Completed, 80, Duration::days(90), now),
        ];

        let report = revenue_report(&orders, now);
        assert_eq!(report.daily_revenue, Decimal::from(10));
        assert_eq!(report.weekly_revenue, Decimal::from(30));
        assert_eq!(report.monthly_revenue, Decimal::from(70));
        // Counts are not time-windowed.
        assert_eq!(report.completed_count, 4);
    }

    #[test]
    fn test_non_completed_orders_earn_nothing() {
        let now = Utc::now();
        let orders = vec![
            order_with(
                CustomerId::new(),
                OrderStatus::Accepted,
                100,
                Duration::hours(1),
                now,
            ),
            order_with(
                CustomerId::new(),
                OrderStatus::Rejected,
                100,
                Duration::hours(1),
                now,
            ),
        ];

        let report = revenue_report(&orders, now);
        assert_eq!(report.daily_revenue, Decimal::ZERO);
        assert_eq!(report.monthly_revenue, Decimal::ZERO);
    }

    #[test]
    fn test_active_users_distinct() {
        let now = Utc::now();
        let repeat = CustomerId::new();
        let orders = vec![
            order_with(repeat, OrderStatus::Pending, 10, Duration::hours(1), now),
            order_with(repeat, OrderStatus::Completed, 10, Duration::hours(2), now),
            order_with(
                CustomerId::new(),
                OrderStatus::Pending,
                10,
                Duration::hours(1),
                now,
            ),
        ];

        assert_eq!(revenue_report(&orders, now).active_users, 2);
    }

    #[test]
    fn test_report_is_deterministic() {
        let now = Utc::now();
        let orders = vec![order_with(
            CustomerId::new(),
            OrderStatus::Completed,
            100,
            Duration::hours(1),
            now,
        )];

        assert_eq!(revenue_report(&orders, now), revenue_report(&orders, now));
    }

    #[test]
    fn test_growth_zero_when_no_weekly_revenue() {
        let report = revenue_report(&[], Utc::now());
        let growth = daily_growth_percent(&report);
        assert_eq!(growth, Decimal::ZERO);
        // Serialized like every other money figure.
        assert_eq!(growth.to_string(), "0.00");
    }

    #[test]
    fn test_growth_against_weekly_average() {
        let now = Utc::now();
        let customer = CustomerId::new();
        // 70 over the week (10/day average), 20 of it today => +100%.
        let orders = vec![
            order_with(customer, OrderStatus::Completed, 20, Duration::hours(1), now),
            order_with(customer, OrderStatus::Completed, 50, Duration::days(5), now),
        ];

        let report = revenue_report(&orders, now);
        assert_eq!(daily_growth_percent(&report), Decimal::from(100));
    }
}

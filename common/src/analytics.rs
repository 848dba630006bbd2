//! Aggregations over the order list for the overview dashboard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::order::{Order, OrderStatus};
use crate::supplier::SupplierId;

/// Order-book rollup shown on the overview dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementSummary {
    /// Committed spend in cents across all non-cancelled orders.
    pub total_spend_cents: u64,
    /// Draft and Pending orders.
    pub open_orders: usize,
    /// Confirmed orders on their way in.
    pub in_transit: usize,
    /// Delivered orders.
    pub received: usize,
    /// Cancelled and Disputed orders.
    pub flagged: usize,
    /// Spend per supplier, highest first.
    pub supplier_spend: Vec<(SupplierId, u64)>,
}

impl ProcurementSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut summary = ProcurementSummary::default();
        let mut per_supplier: BTreeMap<SupplierId, u64> = BTreeMap::new();

        for order in orders {
            match order.status {
                OrderStatus::Draft | OrderStatus::Pending => summary.open_orders += 1,
                OrderStatus::Confirmed => summary.in_transit += 1,
                OrderStatus::Delivered => summary.received += 1,
                OrderStatus::Cancelled | OrderStatus::Disputed => summary.flagged += 1,
            }
            if order.status != OrderStatus::Cancelled {
                summary.total_spend_cents += order.total_cents;
                *per_supplier.entry(order.supplier_id.clone()).or_default() +=
                    order.total_cents;
            }
        }

        summary.supplier_spend = per_supplier.into_iter().collect();
        summary
            .supplier_spend
            .sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Order, OrderId};

    use chrono::Utc;

    fn order(id: &str, supplier: &str, status: OrderStatus, total_cents: u64) -> Order {
        Order {
            id: OrderId(id.into()),
            supplier_id: supplier.into(),
            items: Vec::new(),
            status,
            created_at: Utc::now(),
            total_cents,
        }
    }

    #[test]
    fn buckets_orders_by_status() {
        let orders = vec![
            order("ORD-1", "s1", OrderStatus::Pending, 1000),
            order("ORD-2", "s1", OrderStatus::Confirmed, 2000),
            order("ORD-3", "s2", OrderStatus::Delivered, 3000),
            order("ORD-4", "s2", OrderStatus::Cancelled, 4000),
            order("ORD-5", "s3", OrderStatus::Disputed, 500),
        ];
        let summary = ProcurementSummary::from_orders(&orders);

        assert_eq!(summary.open_orders, 1);
        assert_eq!(summary.in_transit, 1);
        assert_eq!(summary.received, 1);
        assert_eq!(summary.flagged, 2);
    }

    #[test]
    fn cancelled_orders_do_not_count_as_spend() {
        let orders = vec![
            order("ORD-1", "s1", OrderStatus::Delivered, 1000),
            order("ORD-2", "s1", OrderStatus::Cancelled, 9000),
        ];
        let summary = ProcurementSummary::from_orders(&orders);
        assert_eq!(summary.total_spend_cents, 1000);
        assert_eq!(summary.supplier_spend, vec![("s1".into(), 1000)]);
    }

    #[test]
    fn supplier_spend_sorted_highest_first() {
        let orders = vec![
            order("ORD-1", "s1", OrderStatus::Pending, 1000),
            order("ORD-2", "s2", OrderStatus::Confirmed, 5000),
            order("ORD-3", "s1", OrderStatus::Delivered, 1500),
        ];
        let summary = ProcurementSummary::from_orders(&orders);
        assert_eq!(
            summary.supplier_spend,
            vec![("s2".into(), 5000), ("s1".into(), 2500)]
        );
    }

    #[test]
    fn empty_order_book_is_all_zero() {
        assert_eq!(ProcurementSummary::from_orders(&[]), ProcurementSummary::default());
    }
}

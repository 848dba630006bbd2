use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::supplier::SupplierId;

/// Unique order identifier, a short code of the form `ORD-NNNN`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    /// Generate a fresh random short code.
    pub fn generate() -> Self {
        let code: u32 = rand::thread_rng().gen_range(1000..10000);
        OrderId(format!("ORD-{code}"))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        OrderId(s.to_string())
    }
}

/// Purchase-order status. No transition table is enforced: any status
/// may overwrite any other, including a no-op transition to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Draft,
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
    Disputed,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Draft => "Draft",
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Disputed => "Disputed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A purchase order to one supplier.
///
/// Created by checkout or a chat order draft. Only `status` changes
/// afterwards; orders are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub supplier_id: SupplierId,
    pub items: Vec<CartItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// Order total in cents, fixed at creation time.
    pub total_cents: u64,
}

impl Order {
    /// Build a new Pending order from line items, totalling them up.
    pub fn from_items(
        id: OrderId,
        supplier_id: SupplierId,
        items: Vec<CartItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total_cents = items.iter().map(CartItem::total_cents).sum();
        Self {
            id,
            supplier_id,
            items,
            status: OrderStatus::Pending,
            created_at,
            total_cents,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

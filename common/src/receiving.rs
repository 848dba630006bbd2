//! Goods-receiving check-in: reconciling expected vs. actual delivered
//! quantities per line item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::order::{Order, OrderId, OrderStatus};
use crate::product::ProductId;

/// Why a delivered line item was flagged during check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisputeReason {
    Missing,
    Damaged,
    WrongItem,
    PriceChange,
}

impl DisputeReason {
    pub fn label(self) -> &'static str {
        match self {
            DisputeReason::Missing => "Missing",
            DisputeReason::Damaged => "Damaged",
            DisputeReason::WrongItem => "Wrong Item",
            DisputeReason::PriceChange => "Price Change",
        }
    }

    pub fn all() -> &'static [DisputeReason] {
        &[
            DisputeReason::Missing,
            DisputeReason::Damaged,
            DisputeReason::WrongItem,
            DisputeReason::PriceChange,
        ]
    }
}

/// Details recorded when a line item has an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub reason: DisputeReason,
    /// Quantity actually received.
    pub actual_quantity: u32,
    pub evidence_photo: Option<String>,
}

/// The check mark for one line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemCheck {
    Ok,
    Issue(Dispute),
}

impl ItemCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self, ItemCheck::Ok)
    }
}

/// Per-item marks for one order's check-in.
///
/// Check-in completes only when every line item carries a mark; the
/// resulting order status is [`OrderStatus::Delivered`] when everything
/// checked out and [`OrderStatus::Disputed`] when any item was flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingChecklist {
    pub order_id: OrderId,
    marks: BTreeMap<ProductId, ItemCheck>,
}

impl ReceivingChecklist {
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            marks: BTreeMap::new(),
        }
    }

    /// Mark a line item as received correctly. Re-marking overwrites.
    pub fn mark_ok(&mut self, product_id: ProductId) {
        self.marks.insert(product_id, ItemCheck::Ok);
    }

    /// Flag a line item. Re-marking overwrites.
    pub fn mark_issue(
        &mut self,
        product_id: ProductId,
        reason: DisputeReason,
        actual_quantity: u32,
        evidence_photo: Option<String>,
    ) {
        self.marks.insert(
            product_id,
            ItemCheck::Issue(Dispute {
                reason,
                actual_quantity,
                evidence_photo,
            }),
        );
    }

    pub fn mark(&self, product_id: &ProductId) -> Option<&ItemCheck> {
        self.marks.get(product_id)
    }

    pub fn marked_count(&self) -> usize {
        self.marks.len()
    }

    /// True once every line item of `order` has a mark.
    pub fn is_complete(&self, order: &Order) -> bool {
        order
            .items
            .iter()
            .all(|item| self.marks.contains_key(&item.product.id))
    }

    pub fn has_issues(&self) -> bool {
        self.marks.values().any(|mark| !mark.is_ok())
    }

    /// Status the order ends up in when check-in completes.
    pub fn outcome(&self) -> OrderStatus {
        if self.has_issues() {
            OrderStatus::Disputed
        } else {
            OrderStatus::Delivered
        }
    }
}

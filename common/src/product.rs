use std::fmt;

use serde::{Deserialize, Serialize};

use crate::supplier::SupplierId;

/// Unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId(s.to_string())
    }
}

/// A catalog entry in a supplier's price list. Loaded once at startup,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub supplier_id: SupplierId,
    pub name: String,
    /// Order unit shown next to the price, e.g. "5kg Crate".
    pub unit: String,
    /// Price per unit in cents.
    pub price_cents: u64,
    pub image_url: String,
    pub category: String,
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique supplier identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub String);

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SupplierId {
    fn from(s: &str) -> Self {
        SupplierId(s.to_string())
    }
}

/// A vendor the kitchen buys from. Loaded once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub category: String,
    pub logo_url: String,
    pub rating: f32,
}

use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};
use crate::supplier::SupplierId;

/// A product staged for checkout with a chosen quantity.
///
/// Exists only while in the cart or frozen inside an order's line items.
/// Quantity is always at least 1; setting it to 0 removes the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Line total in cents.
    pub fn total_cents(&self) -> u64 {
        self.product.price_cents * self.quantity as u64
    }
}

/// The shopping cart: an ordered list of line items, one per product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Set the quantity for a product.
    ///
    /// Quantity 0 removes the line item, an existing item is updated in
    /// place, a new item is appended. Insertion order is preserved.
    pub fn set_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            self.items.retain(|item| item.product.id != product.id);
            return;
        }
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity = quantity,
            None => self.items.push(CartItem::new(product.clone(), quantity)),
        }
    }

    /// Current quantity of a product, 0 if not in the cart.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == *product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Sum of all line totals in cents.
    pub fn total_cents(&self) -> u64 {
        self.items.iter().map(CartItem::total_cents).sum()
    }

    /// Line items belonging to one supplier, in cart order.
    pub fn items_for_supplier(&self, supplier_id: &SupplierId) -> Vec<&CartItem> {
        self.items
            .iter()
            .filter(|item| item.product.supplier_id == *supplier_id)
            .collect()
    }

    /// Supplier of the first line item. Checkout files the whole order
    /// under this supplier.
    pub fn lead_supplier(&self) -> Option<&SupplierId> {
        self.items.first().map(|item| &item.product.supplier_id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, supplier: &str, price_cents: u64) -> Product {
        Product {
            id: id.into(),
            supplier_id: supplier.into(),
            name: format!("Product {id}"),
            unit: "Each".into(),
            price_cents,
            image_url: String::new(),
            category: "Test".into(),
        }
    }

    #[test]
    fn set_quantity_appends_updates_and_removes() {
        let mut cart = Cart::new();
        let tomatoes = product("p1", "s1", 1250);
        let spinach = product("p2", "s1", 800);

        cart.set_quantity(&tomatoes, 2);
        cart.set_quantity(&spinach, 1);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(&tomatoes.id), 2);

        cart.set_quantity(&tomatoes, 3);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(&tomatoes.id), 3);
        // Update in place keeps cart order
        assert_eq!(cart.items()[0].product.id, tomatoes.id);

        cart.set_quantity(&tomatoes, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&tomatoes.id), 0);
    }

    #[test]
    fn total_sums_line_totals() {
        let mut cart = Cart::new();
        cart.set_quantity(&product("p1", "s1", 1250), 2);
        cart.set_quantity(&product("p3", "s1", 2400), 1);
        assert_eq!(cart.total_cents(), 4900);
    }

    #[test]
    fn items_for_supplier_filters() {
        let mut cart = Cart::new();
        cart.set_quantity(&product("p1", "s1", 1250), 1);
        cart.set_quantity(&product("p4", "s2", 3500), 1);
        cart.set_quantity(&product("p2", "s1", 800), 1);

        let s1_items = cart.items_for_supplier(&"s1".into());
        assert_eq!(s1_items.len(), 2);
        assert_eq!(cart.lead_supplier(), Some(&"s1".into()));
    }

    #[test]
    fn removing_unknown_product_is_a_no_op() {
        let mut cart = Cart::new();
        cart.set_quantity(&product("p1", "s1", 1250), 1);
        cart.set_quantity(&product("p9", "s1", 100), 0);
        assert_eq!(cart.len(), 1);
    }
}

//! The application state owner.
//!
//! All authoritative state lives here and is mutated only through the
//! entry points below. Every operation is a synchronous, total function
//! over the current state; unknown ids are silent no-ops. The two
//! operations that touch both the order list and the chat threads
//! ([`AppState::update_order_status`] and [`AppState::append_message`])
//! keep the embedded order snapshots consistent with the canonical
//! orders by explicit fan-out.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem};
use crate::message::{Message, MessageBody, Sender};
use crate::order::{Order, OrderId, OrderStatus};
use crate::product::Product;
use crate::seed;
use crate::supplier::{Supplier, SupplierId};

/// The single active-view selector. The five views are mutually
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewTab {
    Dashboard,
    Suppliers,
    Chat,
    Orders,
    Receiving,
}

impl ViewTab {
    pub fn label(self) -> &'static str {
        match self {
            ViewTab::Dashboard => "Overview",
            ViewTab::Suppliers => "Suppliers",
            ViewTab::Chat => "Messages",
            ViewTab::Orders => "Purchase Orders",
            ViewTab::Receiving => "Receiving",
        }
    }

    pub fn all() -> &'static [ViewTab] {
        &[
            ViewTab::Dashboard,
            ViewTab::Suppliers,
            ViewTab::Chat,
            ViewTab::Orders,
            ViewTab::Receiving,
        ]
    }
}

/// Authoritative application state. Views receive slices of this and
/// call back into the mutation entry points; they never write fields
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub active_view: ViewTab,
    pub selected_supplier: Option<SupplierId>,
    pub cart_open: bool,
    pub cart: Cart,
    /// Immutable catalog, loaded once at startup.
    pub suppliers: Vec<Supplier>,
    /// Immutable catalog, loaded once at startup.
    pub products: Vec<Product>,
    /// Purchase orders, most recent first.
    pub orders: Vec<Order>,
    /// Append-only message threads keyed by supplier.
    pub threads: HashMap<SupplierId, Vec<Message>>,
}

impl AppState {
    /// Empty state with no catalog, orders or threads.
    pub fn new() -> Self {
        Self {
            active_view: ViewTab::Dashboard,
            selected_supplier: None,
            cart_open: false,
            cart: Cart::new(),
            suppliers: Vec::new(),
            products: Vec::new(),
            orders: Vec::new(),
            threads: HashMap::new(),
        }
    }

    /// State initialized from the mock seed data.
    pub fn seeded() -> Self {
        Self {
            suppliers: seed::seed_suppliers(),
            products: seed::seed_products(),
            orders: seed::seed_orders(),
            threads: seed::seed_threads(),
            ..Self::new()
        }
    }

    pub fn supplier(&self, id: &SupplierId) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == *id)
    }

    /// Catalog entries for one supplier, in catalog order.
    pub fn catalog_of(&self, supplier_id: &SupplierId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.supplier_id == *supplier_id)
            .collect()
    }

    pub fn set_view(&mut self, view: ViewTab) {
        self.active_view = view;
    }

    pub fn select_supplier(&mut self, supplier_id: Option<SupplierId>) {
        self.selected_supplier = supplier_id;
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Set the cart quantity for a product. Quantity 0 removes the line.
    pub fn set_cart_quantity(&mut self, product: &Product, quantity: u32) {
        self.cart.set_quantity(product, quantity);
    }

    pub fn cart_total_cents(&self) -> u64 {
        self.cart.total_cents()
    }

    /// Update the status of a purchase order and fan the change out to
    /// every embedded order snapshot across all threads.
    ///
    /// The canonical order keeps its position in the list; only its
    /// status changes. Snapshots keep every other field. When no order
    /// matches the id, nothing changes anywhere (threads included) and
    /// `false` is returned, so the order list and the snapshots can
    /// never disagree about an id the list does not contain.
    pub fn update_order_status(&mut self, order_id: &OrderId, status: OrderStatus) -> bool {
        let mut matched = false;
        for order in &mut self.orders {
            if order.id == *order_id {
                order.status = status;
                matched = true;
            }
        }
        if !matched {
            return false;
        }

        for thread in self.threads.values_mut() {
            for message in thread.iter_mut() {
                if let MessageBody::Order {
                    order_id: embedded_id,
                    snapshot,
                } = &mut message.body
                {
                    if embedded_id == order_id {
                        snapshot.status = status;
                    }
                }
            }
        }
        true
    }

    /// Append a message to a supplier's thread, creating the thread if
    /// absent. An order card also inserts its snapshot at the front of
    /// the order list in the same call, so the order is visible in the
    /// order list and the receiving queue as soon as the message exists.
    pub fn append_message(&mut self, supplier_id: &SupplierId, message: Message) {
        if let Some(snapshot) = message.order_snapshot() {
            self.orders.insert(0, snapshot.clone());
        }
        self.threads
            .entry(supplier_id.clone())
            .or_default()
            .push(message);
    }

    /// Submit the cart as a purchase order.
    ///
    /// Builds a Pending order from the cart contents (filed under the
    /// first line item's supplier), appends the companion order card to
    /// that supplier's thread, clears the cart, closes the drawer and
    /// switches to the chat view focused on the supplier. Returns the
    /// created order, or `None` when the cart is empty.
    pub fn checkout(&mut self, now: DateTime<Utc>) -> Option<Order> {
        let supplier_id = self.cart.lead_supplier()?.clone();
        let order = Order::from_items(
            OrderId::generate(),
            supplier_id.clone(),
            self.cart.items().to_vec(),
            now,
        );
        let message = Message::order_card(Message::next_id(now), Sender::Buyer, order.clone(), now);
        self.append_message(&supplier_id, message);

        self.cart.clear();
        self.cart_open = false;
        self.selected_supplier = Some(supplier_id);
        self.active_view = ViewTab::Chat;
        Some(order)
    }

    /// Start a new order draft from inside a chat thread.
    ///
    /// Same single-action guarantee as checkout: the order card lands in
    /// the thread and the order in the order list together. Returns
    /// `None` when `items` is empty.
    pub fn draft_order(
        &mut self,
        supplier_id: &SupplierId,
        items: Vec<CartItem>,
        now: DateTime<Utc>,
    ) -> Option<Order> {
        if items.is_empty() {
            return None;
        }
        let order = Order::from_items(OrderId::generate(), supplier_id.clone(), items, now);
        let message = Message::order_card(Message::next_id(now), Sender::Buyer, order.clone(), now);
        self.append_message(supplier_id, message);
        Some(order)
    }

    /// Messages for one supplier, oldest first. Empty if no thread yet.
    pub fn thread(&self, supplier_id: &SupplierId) -> &[Message] {
        self.threads
            .get(supplier_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn last_message(&self, supplier_id: &SupplierId) -> Option<&Message> {
        self.thread(supplier_id).last()
    }

    /// Confirmed orders awaiting check-in, in order-list order.
    pub fn receiving_queue(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Confirmed)
            .collect()
    }

    /// Orders matching a status filter, `None` meaning all.
    pub fn orders_with_status(&self, filter: Option<OrderStatus>) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| filter.is_none_or(|s| o.status == s))
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    fn state() -> AppState {
        AppState::seeded()
    }

    fn snapshot_status(state: &AppState, order_id: &OrderId) -> Vec<OrderStatus> {
        state
            .threads
            .values()
            .flatten()
            .filter_map(|m| m.order_snapshot())
            .filter(|s| s.id == *order_id)
            .map(|s| s.status)
            .collect()
    }

    #[test]
    fn status_update_rewrites_order_and_every_snapshot() {
        let mut state = state();
        let id: OrderId = "ORD-7721".into();

        assert!(state.update_order_status(&id, OrderStatus::Cancelled));

        let order = state.orders.iter().find(|o| o.id == id).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(snapshot_status(&state, &id), vec![OrderStatus::Cancelled]);
    }

    #[test]
    fn status_update_touches_only_the_matching_order() {
        let mut state = state();
        let before: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.id.0 != "ORD-7721")
            .cloned()
            .collect();

        state.update_order_status(&"ORD-7721".into(), OrderStatus::Delivered);

        let after: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.id.0 != "ORD-7721")
            .cloned()
            .collect();
        assert_eq!(before, after);
        // Order list keeps its ordering
        assert_eq!(state.orders[0].id, "ORD-7721".into());
    }

    #[test]
    fn status_update_preserves_other_snapshot_fields() {
        let mut state = state();
        let id: OrderId = "ORD-7721".into();
        let before = state
            .thread(&"s1".into())
            .iter()
            .find_map(|m| m.order_snapshot())
            .cloned()
            .unwrap();

        state.update_order_status(&id, OrderStatus::Delivered);

        let after = state
            .thread(&"s1".into())
            .iter()
            .find_map(|m| m.order_snapshot())
            .cloned()
            .unwrap();
        assert_eq!(after.status, OrderStatus::Delivered);
        assert_eq!(after.items, before.items);
        assert_eq!(after.total_cents, before.total_cents);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn status_update_is_idempotent() {
        let mut first = state();
        first.update_order_status(&"ORD-7721".into(), OrderStatus::Delivered);
        let mut twice = state();
        twice.update_order_status(&"ORD-7721".into(), OrderStatus::Delivered);
        twice.update_order_status(&"ORD-7721".into(), OrderStatus::Delivered);

        assert_eq!(first.orders, twice.orders);
        assert_eq!(first.threads, twice.threads);
    }

    #[test]
    fn unknown_order_id_changes_nothing_anywhere() {
        let mut state = state();
        let orders_before = state.orders.clone();
        let threads_before = state.threads.clone();

        assert!(!state.update_order_status(&"ORD-0000".into(), OrderStatus::Cancelled));

        assert_eq!(state.orders, orders_before);
        assert_eq!(state.threads, threads_before);
    }

    #[test]
    fn append_message_preserves_thread_order() {
        let mut state = state();
        let supplier: SupplierId = "s1".into();
        let before: Vec<Message> = state.thread(&supplier).to_vec();

        let msg = Message::text("m99".into(), Sender::Buyer, "On my way", Utc::now());
        state.append_message(&supplier, msg.clone());

        let after = state.thread(&supplier);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&msg));
    }

    #[test]
    fn append_message_creates_missing_threads() {
        let mut state = state();
        let supplier: SupplierId = "s3".into();
        assert!(state.thread(&supplier).is_empty());

        state.append_message(
            &supplier,
            Message::text("m50".into(), Sender::Buyer, "Any fresh snapper?", Utc::now()),
        );
        assert_eq!(state.thread(&supplier).len(), 1);
    }

    #[test]
    fn appending_an_order_card_fronts_the_order_list() {
        let mut state = state();
        let order = Order::from_items("ORD-5555".into(), "s2".into(), Vec::new(), Utc::now());
        let msg = Message::order_card("m60".into(), Sender::Buyer, order.clone(), Utc::now());

        state.append_message(&"s2".into(), msg);

        assert_eq!(state.orders[0].id, order.id);
        assert_eq!(state.orders.len(), 3);
    }

    #[test]
    fn checkout_is_atomic_and_resets_the_cart() {
        let mut state = state();
        let tomatoes = state.products[0].clone();
        state.set_cart_quantity(&tomatoes, 2);
        state.open_cart();

        let order = state.checkout(Utc::now()).expect("non-empty cart");

        // Example from the catalog: 2 x $12.50 = $25.00, Pending
        assert_eq!(order.total_cents, 2500);
        assert_eq!(order.status, OrderStatus::Pending);

        // Canonical order and thread snapshot land together and agree
        assert_eq!(state.orders[0].id, order.id);
        let snapshot = state
            .thread(&"s1".into())
            .last()
            .and_then(|m| m.order_snapshot())
            .expect("order card appended");
        assert_eq!(snapshot.id, order.id);
        assert_eq!(snapshot.status, order.status);
        assert_eq!(snapshot.total_cents, order.total_cents);

        assert!(state.cart.is_empty());
        assert!(!state.cart_open);
        assert_eq!(state.active_view, ViewTab::Chat);
        assert_eq!(state.selected_supplier, Some("s1".into()));
    }

    #[test]
    fn checkout_with_empty_cart_is_a_no_op() {
        let mut state = state();
        let orders_before = state.orders.clone();

        assert!(state.checkout(Utc::now()).is_none());

        assert_eq!(state.orders, orders_before);
        assert_eq!(state.active_view, ViewTab::Dashboard);
    }

    #[test]
    fn draft_order_lands_in_thread_and_order_list() {
        let mut state = state();
        let supplier: SupplierId = "s1".into();
        let items = vec![
            CartItem::new(state.products[0].clone(), 2),
            CartItem::new(state.products[2].clone(), 1),
        ];

        let order = state.draft_order(&supplier, items, Utc::now()).unwrap();

        assert_eq!(order.total_cents, 4900);
        assert_eq!(state.orders[0].id, order.id);
        let last = state.thread(&supplier).last().unwrap();
        assert_eq!(last.order_snapshot().map(|s| &s.id), Some(&order.id));
    }

    #[test]
    fn draft_order_requires_items() {
        let mut state = state();
        assert!(state.draft_order(&"s1".into(), Vec::new(), Utc::now()).is_none());
        assert_eq!(state.orders.len(), 2);
    }

    #[test]
    fn receiving_queue_lists_confirmed_orders_only() {
        let mut state = state();
        let queue: Vec<_> = state.receiving_queue().iter().map(|o| o.id.clone()).collect();
        assert_eq!(queue, vec![OrderId("ORD-7721".into())]);

        state.update_order_status(&"ORD-7721".into(), OrderStatus::Delivered);
        assert!(state.receiving_queue().is_empty());
    }

    #[test]
    fn navigation_entry_points_update_the_view_state() {
        let mut state = state();
        state.set_view(ViewTab::Orders);
        state.select_supplier(Some("s2".into()));
        state.open_cart();

        assert_eq!(state.active_view, ViewTab::Orders);
        assert_eq!(state.selected_supplier, Some("s2".into()));
        assert!(state.cart_open);

        state.close_cart();
        state.select_supplier(None);
        assert!(!state.cart_open);
        assert_eq!(state.selected_supplier, None);
    }

    #[test]
    fn orders_with_status_filters() {
        let state = state();
        assert_eq!(state.orders_with_status(None).len(), 2);
        assert_eq!(state.orders_with_status(Some(OrderStatus::Pending)).len(), 1);
        assert_eq!(state.orders_with_status(Some(OrderStatus::Delivered)).len(), 0);
    }
}

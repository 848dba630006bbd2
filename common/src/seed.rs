//! Mock data loaded at startup. This is the only data source in the
//! application; everything resets on reload.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::cart::CartItem;
use crate::message::{Message, Sender};
use crate::order::{Order, OrderId, OrderStatus};
use crate::product::Product;
use crate::supplier::{Supplier, SupplierId};

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("seed timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

pub fn seed_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "s1".into(),
            name: "Fresh Veggies Co.".into(),
            category: "Produce".into(),
            logo_url: "https://picsum.photos/seed/veg/100/100".into(),
            rating: 4.8,
        },
        Supplier {
            id: "s2".into(),
            name: "Prime Meat Cutters".into(),
            category: "Meat".into(),
            logo_url: "https://picsum.photos/seed/meat/100/100".into(),
            rating: 4.9,
        },
        Supplier {
            id: "s3".into(),
            name: "Ocean Direct".into(),
            category: "Seafood".into(),
            logo_url: "https://picsum.photos/seed/fish/100/100".into(),
            rating: 4.7,
        },
        Supplier {
            id: "s4".into(),
            name: "Dairy Dreams".into(),
            category: "Dairy".into(),
            logo_url: "https://picsum.photos/seed/milk/100/100".into(),
            rating: 4.5,
        },
    ]
}

pub fn seed_products() -> Vec<Product> {
    vec![
        product("p1", "s1", "Roma Tomatoes", "5kg Crate", 1250, "tomato", "Veg"),
        product("p2", "s1", "Baby Spinach", "1kg Bag", 800, "spinach", "Leafy"),
        product("p3", "s1", "Avocados (Hass)", "Box of 12", 2400, "avo", "Fruits"),
        product("p4", "s2", "Ribeye Steak", "Per kg", 3500, "steak", "Beef"),
        product("p5", "s2", "Chicken Breast", "5kg Bulk", 4500, "chicken", "Poultry"),
        product("p6", "s4", "Whole Milk", "Case of 6x2L", 1800, "milk", "Liquid"),
    ]
}

fn product(
    id: &str,
    supplier: &str,
    name: &str,
    unit: &str,
    price_cents: u64,
    image_seed: &str,
    category: &str,
) -> Product {
    Product {
        id: id.into(),
        supplier_id: supplier.into(),
        name: name.into(),
        unit: unit.into(),
        price_cents,
        image_url: format!("https://picsum.photos/seed/{image_seed}/150/150"),
        category: category.into(),
    }
}

fn find(products: &[Product], id: &str) -> Product {
    products
        .iter()
        .find(|p| p.id.0 == id)
        .expect("seed orders reference seeded products")
        .clone()
}

/// The confirmed vegetable order also embedded in the s1 chat thread.
fn order_7721(products: &[Product]) -> Order {
    Order {
        id: OrderId("ORD-7721".into()),
        supplier_id: "s1".into(),
        items: vec![
            CartItem::new(find(products, "p1"), 2),
            CartItem::new(find(products, "p3"), 1),
        ],
        status: OrderStatus::Confirmed,
        created_at: ts("2024-05-18T10:30:00Z"),
        // Seed totals are carried over verbatim, not recomputed.
        total_cents: 4450,
    }
}

pub fn seed_orders() -> Vec<Order> {
    let products = seed_products();
    vec![
        order_7721(&products),
        Order {
            id: OrderId("ORD-8832".into()),
            supplier_id: "s2".into(),
            items: vec![CartItem::new(find(&products, "p4"), 1)],
            status: OrderStatus::Pending,
            created_at: ts("2024-05-19T08:15:00Z"),
            total_cents: 3500,
        },
    ]
}

pub fn seed_threads() -> HashMap<SupplierId, Vec<Message>> {
    let products = seed_products();
    let mut threads = HashMap::new();
    threads.insert(
        SupplierId("s1".into()),
        vec![
            Message::text(
                "m1".into(),
                Sender::Supplier("s1".into()),
                "Hi Chef! We have extra fresh Avocados today.",
                ts("2024-05-19T09:00:00Z"),
            ),
            Message::text(
                "m2".into(),
                Sender::Buyer,
                "Great, I will add some to the order.",
                ts("2024-05-19T09:05:00Z"),
            ),
            Message::order_card(
                "m3".into(),
                Sender::Buyer,
                order_7721(&products),
                ts("2024-05-19T09:10:00Z"),
            ),
        ],
    );
    threads.insert(
        SupplierId("s2".into()),
        vec![Message::text(
            "m4".into(),
            Sender::Supplier("s2".into()),
            "Order #ORD-8832 confirmed. Out for delivery tomorrow.",
            ts("2024-05-19T10:45:00Z"),
        )],
    );
    threads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_reference_seeded_suppliers() {
        let suppliers = seed_suppliers();
        for p in seed_products() {
            assert!(
                suppliers.iter().any(|s| s.id == p.supplier_id),
                "{} has unknown supplier {}",
                p.id,
                p.supplier_id
            );
        }
    }

    #[test]
    fn chat_snapshot_matches_the_canonical_seed_order() {
        let orders = seed_orders();
        let canonical = orders.iter().find(|o| o.id.0 == "ORD-7721").unwrap();

        let threads = seed_threads();
        let s1 = &threads[&SupplierId("s1".into())];
        let snapshot = s1
            .iter()
            .find_map(|m| m.order_snapshot())
            .expect("s1 thread embeds an order card");

        assert_eq!(snapshot, canonical);
        assert_eq!(snapshot.status, OrderStatus::Confirmed);
        assert_eq!(snapshot.total_cents, 4450);
    }

    #[test]
    fn threads_are_in_arrival_order() {
        let threads = seed_threads();
        let s1 = &threads[&SupplierId("s1".into())];
        let ids: Vec<_> = s1.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m2", "m3"]);
    }
}

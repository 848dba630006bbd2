use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::order::{Order, OrderId};
use crate::supplier::SupplierId;

/// Unique message identifier.
pub type MessageId = String;

/// Who wrote a message in a supplier thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// The kitchen side of the conversation.
    Buyer,
    Supplier(SupplierId),
}

impl Sender {
    pub fn is_buyer(&self) -> bool {
        matches!(self, Sender::Buyer)
    }
}

/// Message payload.
///
/// The `Order` variant embeds a point-in-time value copy of the order for
/// inline display, keyed back to the canonical order by id. The copy is
/// resynchronized on every status change of the source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageBody {
    Text { body: String },
    Image { media_url: String },
    Voice { media_url: String },
    Order { order_id: OrderId, snapshot: Order },
}

/// A message in a supplier thread. Threads are append-only; messages are
/// never edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub body: MessageBody,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn text(id: MessageId, sender: Sender, body: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id,
            sender,
            body: MessageBody::Text { body: body.into() },
            sent_at,
        }
    }

    /// Build an order card message embedding a snapshot of `order`.
    pub fn order_card(id: MessageId, sender: Sender, order: Order, sent_at: DateTime<Utc>) -> Self {
        Self {
            id,
            sender,
            body: MessageBody::Order {
                order_id: order.id.clone(),
                snapshot: order,
            },
            sent_at,
        }
    }

    /// Derive a fresh message id from a timestamp. A process-wide
    /// sequence number keeps ids distinct within the same millisecond.
    pub fn next_id(now: DateTime<Utc>) -> MessageId {
        static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);
        let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
        format!("msg-{}-{seq}", now.timestamp_millis())
    }

    /// The embedded order snapshot, if this is an order card.
    pub fn order_snapshot(&self) -> Option<&Order> {
        match &self.body {
            MessageBody::Order { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    /// One-line preview for the thread list.
    pub fn preview(&self) -> String {
        match &self.body {
            MessageBody::Text { body } => body.clone(),
            MessageBody::Image { .. } => "[Photo]".into(),
            MessageBody::Voice { .. } => "[Voice note]".into(),
            MessageBody::Order { order_id, .. } => format!("Order request {order_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;

    fn order(id: &str) -> Order {
        Order::from_items(id.into(), "s1".into(), Vec::new(), Utc::now())
    }

    #[test]
    fn order_card_keys_snapshot_by_order_id() {
        let msg = Message::order_card("m1".into(), Sender::Buyer, order("ORD-1234"), Utc::now());
        let snapshot = msg.order_snapshot().expect("order card");
        assert_eq!(snapshot.id, "ORD-1234".into());
        match &msg.body {
            MessageBody::Order { order_id, .. } => assert_eq!(*order_id, snapshot.id),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn text_messages_have_no_snapshot() {
        let msg = Message::text("m2".into(), Sender::Supplier("s1".into()), "Hi Chef!", Utc::now());
        assert!(msg.order_snapshot().is_none());
        assert_eq!(msg.preview(), "Hi Chef!");
    }

    #[test]
    fn ids_are_distinct_within_the_same_millisecond() {
        let now = Utc::now();
        assert_ne!(Message::next_id(now), Message::next_id(now));
    }

    #[test]
    fn body_serializes_with_a_type_tag() {
        let msg = Message::text("m1".into(), Sender::Buyer, "hello", Utc::now());
        let json = serde_json::to_value(&msg.body).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["body"], "hello");
    }
}

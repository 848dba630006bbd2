use chrono::Utc;
use dioxus::prelude::*;

use kitchenflow_common::cart::CartItem;
use kitchenflow_common::currency::format_cents;
use kitchenflow_common::message::{Message, MessageBody, Sender};
use kitchenflow_common::order::{Order, OrderStatus};
use kitchenflow_common::state::ViewTab;
use kitchenflow_common::supplier::SupplierId;

use super::app_state::use_app_state;

/// Per-supplier chat: thread list on the left, the active conversation
/// with inline order cards on the right.
#[component]
pub fn ChatView() -> Element {
    let mut app = use_app_state();
    let mut draft = use_signal(String::new);

    let state = app.read();
    let selected: Option<SupplierId> = state
        .selected_supplier
        .clone()
        .or_else(|| state.suppliers.first().map(|s| s.id.clone()));
    // Thread list entries: (id, name, logo, preview, time)
    let contacts: Vec<(SupplierId, String, String, String, String)> = state
        .suppliers
        .iter()
        .map(|supplier| {
            let last = state.last_message(&supplier.id);
            let preview = last.map(|m| m.preview()).unwrap_or("No messages".into());
            let time = last
                .map(|m| m.sent_at.format("%H:%M").to_string())
                .unwrap_or_default();
            (
                supplier.id.clone(),
                supplier.name.clone(),
                supplier.logo_url.clone(),
                preview,
                time,
            )
        })
        .collect();
    let (thread, supplier_name): (Vec<Message>, String) = match &selected {
        Some(id) => (
            state.thread(id).to_vec(),
            state.supplier(id).map(|s| s.name.clone()).unwrap_or_default(),
        ),
        None => (Vec::new(), String::new()),
    };
    drop(state);

    let Some(supplier_id) = selected else {
        return rsx! { p { class: "empty-state", "No suppliers to chat with." } };
    };

    let send = {
        let supplier_id = supplier_id.clone();
        move || {
            let body = draft.read().trim().to_string();
            if body.is_empty() {
                return;
            }
            let now = Utc::now();
            let message = Message::text(Message::next_id(now), Sender::Buyer, body, now);
            app.write().append_message(&supplier_id, message);
            draft.set(String::new());
        }
    };

    let new_draft = {
        let supplier_id = supplier_id.clone();
        move |_| {
            // Draft the usual restock: first two catalog items of the
            // supplier, quantities 2 and 1.
            let items: Vec<CartItem> = {
                let state = app.read();
                state
                    .catalog_of(&supplier_id)
                    .into_iter()
                    .take(2)
                    .enumerate()
                    .map(|(i, p)| CartItem::new(p.clone(), if i == 0 { 2 } else { 1 }))
                    .collect()
            };
            if let Some(order) = app.write().draft_order(&supplier_id, items, Utc::now()) {
                tracing::info!(order = %order.id, supplier = %supplier_id, "order draft created");
            }
        }
    };

    rsx! {
        div { class: "chat-view",
            div { class: "contact-list",
                h2 { "Messages" }
                for (id, name, logo, preview, time) in contacts.iter() {
                    {
                        let id_clone = id.clone();
                        let is_active = *id == supplier_id;
                        rsx! {
                            button {
                                class: if is_active { "contact-card active" } else { "contact-card" },
                                key: "{id}",
                                onclick: move |_| app.write().select_supplier(Some(id_clone.clone())),
                                img { class: "contact-logo", src: "{logo}" }
                                div { class: "contact-info",
                                    div { class: "contact-top",
                                        h3 { "{name}" }
                                        span { class: "contact-time", "{time}" }
                                    }
                                    p { class: "contact-preview", "{preview}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "chat-thread",
                div { class: "thread-header",
                    h3 { "{supplier_name}" }
                    span { class: "thread-status", "Vendor Support Online" }
                }

                div { class: "thread-messages",
                    for message in thread.iter() {
                        MessageRow { message: message.clone() }
                    }
                }

                div { class: "thread-footer",
                    div { class: "quick-actions",
                        button { class: "quick-action primary", onclick: new_draft, "New Order Draft" }
                        button {
                            class: "quick-action",
                            onclick: move |_| app.write().set_view(ViewTab::Receiving),
                            "Track Logistics"
                        }
                        button {
                            class: "quick-action",
                            onclick: move |_| app.write().set_view(ViewTab::Orders),
                            "History"
                        }
                    }
                    div { class: "chat-input",
                        input {
                            r#type: "text",
                            placeholder: "Type your message...",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                            onkeypress: {
                                let mut send = send.clone();
                                move |evt: KeyboardEvent| {
                                    if evt.key() == Key::Enter {
                                        send();
                                    }
                                }
                            },
                        }
                        button {
                            class: "send-button",
                            onclick: {
                                let mut send = send.clone();
                                move |_| send()
                            },
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: Message) -> Element {
    let from_buyer = message.sender.is_buyer();
    let time = message.sent_at.format("%H:%M").to_string();

    match &message.body {
        MessageBody::Order { snapshot, .. } => rsx! {
            div { class: if from_buyer { "message-row sent" } else { "message-row received" },
                OrderCard { order: snapshot.clone() }
            }
        },
        MessageBody::Text { body } => rsx! {
            div { class: if from_buyer { "message-row sent" } else { "message-row received" },
                div { class: "message-bubble",
                    p { "{body}" }
                    span { class: "message-time", "{time}" }
                }
            }
        },
        MessageBody::Image { media_url } => rsx! {
            div { class: if from_buyer { "message-row sent" } else { "message-row received" },
                img { class: "message-media", src: "{media_url}" }
            }
        },
        MessageBody::Voice { .. } => rsx! {
            div { class: if from_buyer { "message-row sent" } else { "message-row received" },
                div { class: "message-bubble", p { "[Voice note]" } }
            }
        },
    }
}

/// Interactive order card embedded in the thread. Pending orders offer
/// Confirm/Cancel; settled ones are display-only.
#[component]
fn OrderCard(order: Order) -> Element {
    let mut app = use_app_state();

    let status = order.status;
    let total = format_cents(order.total_cents);
    let badge_class = match status {
        OrderStatus::Confirmed => "status-badge confirmed",
        OrderStatus::Cancelled => "status-badge cancelled",
        OrderStatus::Delivered => "status-badge delivered",
        OrderStatus::Disputed => "status-badge disputed",
        OrderStatus::Pending | OrderStatus::Draft => "status-badge pending",
    };

    let confirm = {
        let id = order.id.clone();
        move |_| {
            app.write().update_order_status(&id, OrderStatus::Confirmed);
        }
    };
    let cancel = {
        let id = order.id.clone();
        move |_| {
            app.write().update_order_status(&id, OrderStatus::Cancelled);
        }
    };

    rsx! {
        div { class: "order-card",
            div { class: "order-card-header",
                div {
                    span { class: "order-card-label", "Reference" }
                    span { class: "order-card-id", "{order.id}" }
                }
                span { class: "{badge_class}", "{status}" }
            }
            div { class: "order-card-items",
                for item in order.items.iter() {
                    div { class: "order-card-line",
                        key: "{item.product.id}",
                        span { "{item.quantity}x {item.product.name}" }
                        span { class: "order-card-line-total", {format_cents(item.total_cents())} }
                    }
                }
                div { class: "order-card-total",
                    span { "Total Amount" }
                    span { class: "order-card-sum", "{total}" }
                }
            }
            if status == OrderStatus::Pending {
                div { class: "order-card-actions",
                    button { class: "confirm-button", onclick: confirm, "Confirm" }
                    button { class: "cancel-button", onclick: cancel, "Cancel" }
                }
            }
        }
    }
}

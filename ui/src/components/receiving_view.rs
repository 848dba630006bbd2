use dioxus::prelude::*;

use kitchenflow_common::cart::CartItem;
use kitchenflow_common::order::Order;
use kitchenflow_common::receiving::{DisputeReason, ItemCheck, ReceivingChecklist};

use super::app_state::use_app_state;

/// Goods receiving: the queue of confirmed deliveries, and the per-item
/// check-in flow for the opened one.
#[component]
pub fn ReceivingView() -> Element {
    let app = use_app_state();
    let mut checklist = use_signal(|| None::<ReceivingChecklist>);

    let open_order: Option<Order> = checklist.read().as_ref().and_then(|cl| {
        let state = app.read();
        state.orders.iter().find(|o| o.id == cl.order_id).cloned()
    });

    if let Some(order) = open_order {
        return rsx! { CheckInDetail { order, checklist } };
    }

    let state = app.read();
    // Queue entries: (order, supplier name, logo)
    let queue: Vec<(Order, String, String)> = state
        .receiving_queue()
        .into_iter()
        .map(|order| {
            let supplier = state.supplier(&order.supplier_id);
            (
                order.clone(),
                supplier.map(|s| s.name.clone()).unwrap_or_default(),
                supplier.map(|s| s.logo_url.clone()).unwrap_or_default(),
            )
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "receiving-view",
            div { class: "receiving-hero",
                h3 { "Delivery Hub" }
                p { class: "receiving-subtitle", "Review incoming goods" }
                span { class: "receiving-count", "{queue.len()}" }
            }

            section {
                h3 { class: "section-title", "Pending Verify" }
                if queue.is_empty() {
                    p { class: "empty-state", "No pending deliveries" }
                }
                for (order, supplier_name, logo) in queue.into_iter() {
                    {
                        let order_id = order.id.clone();
                        let item_count = order.item_count();
                        rsx! {
                            button { class: "delivery-card",
                                key: "{order.id}",
                                onclick: move |_| checklist.set(Some(ReceivingChecklist::new(order_id.clone()))),
                                img { class: "delivery-logo", src: "{logo}" }
                                div { class: "delivery-info",
                                    h4 { "{supplier_name}" }
                                    p { "{order.id} - {item_count} items" }
                                }
                                span { class: "delivery-badge", "En Route" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CheckInDetail(order: Order, checklist: Signal<Option<ReceivingChecklist>>) -> Element {
    let mut app = use_app_state();

    let supplier_name = app
        .read()
        .supplier(&order.supplier_id)
        .map(|s| s.name.clone())
        .unwrap_or_default();

    let complete = checklist
        .read()
        .as_ref()
        .is_some_and(|cl| cl.is_complete(&order));

    let finish = {
        let order_id = order.id.clone();
        move |_| {
            let outcome = match checklist.read().as_ref() {
                Some(cl) => cl.outcome(),
                None => return,
            };
            app.write().update_order_status(&order_id, outcome);
            tracing::info!(order = %order_id, status = %outcome, "check-in completed");
            checklist.set(None);
        }
    };

    rsx! {
        div { class: "checkin-detail",
            div { class: "checkin-header",
                button {
                    class: "back-button",
                    onclick: move |_| checklist.set(None),
                    "Back"
                }
                div {
                    h2 { "Verify Delivery" }
                    p { class: "checkin-subtitle", "{order.id} - {supplier_name}" }
                }
            }

            div { class: "checkin-items",
                for item in order.items.iter() {
                    CheckInItem { item: item.clone(), checklist }
                }
            }

            div { class: "checkin-footer",
                button {
                    class: "complete-button",
                    disabled: !complete,
                    onclick: finish,
                    "Complete Check-in"
                }
            }
        }
    }
}

#[component]
fn CheckInItem(item: CartItem, checklist: Signal<Option<ReceivingChecklist>>) -> Element {
    let product_id = item.product.id.clone();
    let expected = item.quantity;

    let mark = checklist
        .read()
        .as_ref()
        .and_then(|cl| cl.mark(&product_id).cloned());
    let issue = match &mark {
        Some(ItemCheck::Issue(dispute)) => Some(dispute.clone()),
        _ => None,
    };

    let mark_ok = {
        let product_id = product_id.clone();
        move |_| {
            if let Some(cl) = checklist.write().as_mut() {
                cl.mark_ok(product_id.clone());
            }
        }
    };
    let mark_issue = {
        let product_id = product_id.clone();
        move |_| {
            if let Some(cl) = checklist.write().as_mut() {
                cl.mark_issue(product_id.clone(), DisputeReason::Missing, expected, None);
            }
        }
    };

    rsx! {
        div { class: "checkin-item",
            div { class: "checkin-item-head",
                span { class: "checkin-qty", "{item.quantity}x" }
                div {
                    h4 { "{item.product.name}" }
                    p { class: "checkin-unit", "{item.product.unit}" }
                }
            }

            div { class: "checkin-marks",
                button {
                    class: if matches!(mark, Some(ItemCheck::Ok)) { "mark-button ok active" } else { "mark-button ok" },
                    onclick: mark_ok,
                    "Correct"
                }
                button {
                    class: if issue.is_some() { "mark-button issue active" } else { "mark-button issue" },
                    onclick: mark_issue,
                    "Issue"
                }
            }

            if let Some(dispute) = issue {
                div { class: "issue-form",
                    label { "Reason" }
                    select {
                        value: "{dispute.reason.label()}",
                        onchange: {
                            let product_id = product_id.clone();
                            let actual = dispute.actual_quantity;
                            move |evt: FormEvent| {
                                let reason = DisputeReason::all()
                                    .iter()
                                    .copied()
                                    .find(|r| r.label() == evt.value())
                                    .unwrap_or(DisputeReason::Missing);
                                if let Some(cl) = checklist.write().as_mut() {
                                    cl.mark_issue(product_id.clone(), reason, actual, None);
                                }
                            }
                        },
                        for reason in DisputeReason::all() {
                            option { value: "{reason.label()}", "{reason.label()}" }
                        }
                    }
                    label { "Actual Qty" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{dispute.actual_quantity}",
                        oninput: {
                            let product_id = product_id.clone();
                            let reason = dispute.reason;
                            move |evt: FormEvent| {
                                if let Ok(actual) = evt.value().parse::<u32>() {
                                    if let Some(cl) = checklist.write().as_mut() {
                                        cl.mark_issue(product_id.clone(), reason, actual, None);
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

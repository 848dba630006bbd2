use chrono::Utc;
use dioxus::prelude::*;

use kitchenflow_common::currency::format_cents;

use super::app_state::use_app_state;

/// Slide-over cart review panel with the checkout action.
#[component]
pub fn CartDrawer() -> Element {
    let mut app = use_app_state();

    let state = app.read();
    let is_empty = state.cart.is_empty();
    let total = format_cents(state.cart_total_cents());
    // Cart lines grouped per supplier, cloned out of the read guard:
    // (supplier name, [(product name, qty, unit, line total)])
    let groups: Vec<(String, Vec<(String, u32, String, String)>)> = state
        .suppliers
        .iter()
        .filter_map(|supplier| {
            let items = state.cart.items_for_supplier(&supplier.id);
            if items.is_empty() {
                return None;
            }
            let lines = items
                .into_iter()
                .map(|item| {
                    (
                        item.product.name.clone(),
                        item.quantity,
                        item.product.unit.clone(),
                        format_cents(item.total_cents()),
                    )
                })
                .collect();
            Some((supplier.name.clone(), lines))
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "drawer-overlay",
            div {
                class: "drawer-backdrop",
                onclick: move |_| app.write().close_cart(),
            }
            div { class: "cart-drawer",
                div { class: "drawer-header",
                    h2 { "Review Order" }
                    button {
                        class: "drawer-close",
                        onclick: move |_| app.write().close_cart(),
                        "Close"
                    }
                }

                div { class: "drawer-body",
                    if is_empty {
                        p { class: "empty-state", "Your cart is empty" }
                    } else {
                        for (supplier_name, lines) in groups.iter() {
                            div { class: "cart-group",
                                key: "{supplier_name}",
                                h3 { "{supplier_name}" }
                                for (name, qty, unit, line_total) in lines.iter() {
                                    div { class: "cart-line",
                                        key: "{name}",
                                        div { class: "cart-line-info",
                                            p { class: "cart-line-name", "{name}" }
                                            p { class: "cart-line-qty", "{qty} x {unit}" }
                                        }
                                        span { class: "cart-line-total", "{line_total}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "drawer-footer",
                    div { class: "cart-total-row",
                        span { "Total Order Amount" }
                        span { class: "cart-total", "{total}" }
                    }
                    button {
                        class: "checkout-button",
                        disabled: is_empty,
                        onclick: move |_| {
                            if let Some(order) = app.write().checkout(Utc::now()) {
                                tracing::info!(order = %order.id, total = order.total_cents, "order placed");
                            }
                        },
                        "Submit Purchase Order"
                    }
                }
            }
        }
    }
}

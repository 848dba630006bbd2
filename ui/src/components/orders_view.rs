use dioxus::prelude::*;

use kitchenflow_common::currency::format_cents;
use kitchenflow_common::order::OrderStatus;
use kitchenflow_common::state::ViewTab;

use super::app_state::use_app_state;

const FILTERS: &[(Option<OrderStatus>, &str)] = &[
    (None, "All"),
    (Some(OrderStatus::Pending), "Pending"),
    (Some(OrderStatus::Confirmed), "Confirmed"),
    (Some(OrderStatus::Delivered), "Delivered"),
];

/// Purchase-order list with a status filter.
#[component]
pub fn OrdersView() -> Element {
    let mut app = use_app_state();
    let mut filter = use_signal(|| None::<OrderStatus>);

    let state = app.read();
    let current = *filter.read();
    // Row data: (id, vendor, item count, total, status)
    let rows: Vec<(String, String, usize, String, OrderStatus)> = state
        .orders_with_status(current)
        .into_iter()
        .map(|order| {
            let vendor = state
                .supplier(&order.supplier_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| order.supplier_id.to_string());
            (
                order.id.to_string(),
                vendor,
                order.item_count(),
                format_cents(order.total_cents),
                order.status,
            )
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "orders-view",
            div { class: "orders-toolbar",
                button {
                    class: "new-order-button",
                    onclick: move |_| app.write().set_view(ViewTab::Suppliers),
                    "New Order"
                }
                div { class: "order-filters",
                    for (value, label) in FILTERS.iter() {
                        button {
                            class: if current == *value { "filter-button active" } else { "filter-button" },
                            key: "{label}",
                            onclick: move |_| filter.set(*value),
                            "{label}"
                        }
                    }
                }
            }

            table { class: "orders-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Vendor" }
                        th { "Items" }
                        th { "Total" }
                        th { "Status" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { colspan: "5", class: "empty-state", "No matching orders found" }
                        }
                    }
                    for (id, vendor, items, total, status) in rows.iter() {
                        tr {
                            key: "{id}",
                            td { class: "order-id", "{id}" }
                            td { "{vendor}" }
                            td { "{items} SKU" }
                            td { class: "order-total", "{total}" }
                            td { StatusBadge { status: *status } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatusBadge(status: OrderStatus) -> Element {
    let class = match status {
        OrderStatus::Delivered => "status-badge delivered",
        OrderStatus::Confirmed => "status-badge confirmed",
        OrderStatus::Pending => "status-badge pending",
        OrderStatus::Cancelled => "status-badge cancelled",
        OrderStatus::Disputed => "status-badge disputed",
        OrderStatus::Draft => "status-badge draft",
    };
    rsx! {
        span { class: "{class}", "{status}" }
    }
}

use dioxus::prelude::*;

use kitchenflow_common::analytics::ProcurementSummary;
use kitchenflow_common::currency::format_cents;
use kitchenflow_common::order::OrderStatus;
use kitchenflow_common::state::ViewTab;

use super::app_state::use_app_state;
use super::orders_view::StatusBadge;

/// Weekly procurement wave, spend vs. budget target.
const SPEND_WAVE: [f64; 7] = [18.0, 28.0, 12.0, 32.0, 18.0, 38.0, 14.0];
const BUDGET_WAVE: [f64; 7] = [15.0, 22.0, 18.0, 28.0, 22.0, 30.0, 8.0];

/// Y-axis ceiling of the wave chart.
const WAVE_SCALE: f64 = 40.0;

/// Procurement overview: stat cards, the spend wave chart and the most
/// recent purchase orders.
#[component]
pub fn DashboardView() -> Element {
    let mut app = use_app_state();

    let state = app.read();
    let summary = ProcurementSummary::from_orders(&state.orders);
    // Recent order rows: (id, vendor, total, status)
    let recent: Vec<(String, String, String, OrderStatus)> = state
        .orders
        .iter()
        .take(5)
        .map(|order| {
            let vendor = state
                .supplier(&order.supplier_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| order.supplier_id.to_string());
            (
                order.id.to_string(),
                vendor,
                format_cents(order.total_cents),
                order.status,
            )
        })
        .collect();
    let supplier_spend: Vec<(String, String)> = summary
        .supplier_spend
        .iter()
        .map(|(id, cents)| {
            let name = state
                .supplier(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.to_string());
            (name, format_cents(*cents))
        })
        .collect();
    drop(state);

    let total_spend = format_cents(summary.total_spend_cents);
    let spend_path = bezier_path(&SPEND_WAVE, 100.0, 100.0);
    let budget_path = bezier_path(&BUDGET_WAVE, 100.0, 100.0);

    rsx! {
        div { class: "dashboard-view",
            div { class: "dashboard-header",
                h1 { "Procurement Overview" }
                p { class: "dashboard-subtitle", "Supply Chain & Cost Analytics" }
            }

            div { class: "stat-grid",
                StatCard { label: "Committed Spend", value: total_spend }
                StatCard { label: "Open Orders", value: summary.open_orders.to_string() }
                StatCard { label: "In Transit", value: summary.in_transit.to_string() }
                StatCard { label: "Received", value: summary.received.to_string() }
                StatCard { label: "Flagged", value: summary.flagged.to_string() }
            }

            div { class: "wave-chart",
                h3 { "Procurement Waves" }
                svg {
                    view_box: "0 0 100 100",
                    preserve_aspect_ratio: "none",
                    path {
                        d: "{spend_path}",
                        fill: "none",
                        stroke: "#6366f1",
                        stroke_width: "2",
                        stroke_linecap: "round",
                    }
                    path {
                        d: "{budget_path}",
                        fill: "none",
                        stroke: "#f97316",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_dasharray: "3 2",
                    }
                }
                div { class: "wave-legend",
                    span { class: "legend spend", "Spend" }
                    span { class: "legend budget", "Budget Target" }
                }
            }

            div { class: "dashboard-columns",
                section { class: "recent-orders",
                    div { class: "section-head",
                        h3 { "Recent Purchase Orders" }
                        button {
                            class: "link-button",
                            onclick: move |_| app.write().set_view(ViewTab::Orders),
                            "Full View"
                        }
                    }
                    table {
                        tbody {
                            for (id, vendor, total, status) in recent.iter() {
                                tr {
                                    key: "{id}",
                                    td { class: "order-id", "{id}" }
                                    td { "{vendor}" }
                                    td { "{total}" }
                                    td { StatusBadge { status: *status } }
                                }
                            }
                        }
                    }
                }

                section { class: "supplier-spend",
                    h3 { "Spend by Supplier" }
                    if supplier_spend.is_empty() {
                        p { class: "empty-state", "No spend recorded" }
                    }
                    for (name, spend) in supplier_spend.iter() {
                        div { class: "spend-row",
                            key: "{name}",
                            span { "{name}" }
                            span { class: "spend-amount", "{spend}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}

/// Smooth cubic-bezier path through the wave points, in a
/// `width` x `height` viewBox with values scaled against [`WAVE_SCALE`].
fn bezier_path(data: &[f64], width: f64, height: f64) -> String {
    if data.is_empty() {
        return String::new();
    }
    let points: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, val)| {
            let x = if data.len() > 1 {
                (i as f64 / (data.len() - 1) as f64) * width
            } else {
                0.0
            };
            let y = height - (val / WAVE_SCALE) * height;
            (x, y)
        })
        .collect();

    let mut d = format!("M {},{}", points[0].0, points[0].1);
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        let cp_x = x0 + (x1 - x0) / 2.0;
        d.push_str(&format!(" C {cp_x},{y0} {cp_x},{y1} {x1},{y1}"));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_starts_at_first_point() {
        let d = bezier_path(&[40.0, 20.0], 100.0, 100.0);
        assert!(d.starts_with("M 0,0"), "got {d}");
        assert!(d.contains(" C "));
    }

    #[test]
    fn empty_series_yields_empty_path() {
        assert_eq!(bezier_path(&[], 100.0, 100.0), "");
    }

    #[test]
    fn one_segment_per_adjacent_pair() {
        let d = bezier_path(&SPEND_WAVE, 100.0, 100.0);
        assert_eq!(d.matches(" C ").count(), SPEND_WAVE.len() - 1);
    }
}

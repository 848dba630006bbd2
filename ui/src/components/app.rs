use dioxus::prelude::*;

use kitchenflow_common::state::{AppState, ViewTab};

use super::app_state::use_app_state;
use super::cart_drawer::CartDrawer;
use super::chat_view::ChatView;
use super::dashboard_view::DashboardView;
use super::orders_view::OrdersView;
use super::receiving_view::ReceivingView;
use super::suppliers_view::SuppliersView;

static MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AppState::seeded()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        AppShell {}
    }
}

#[component]
fn AppShell() -> Element {
    let mut app = use_app_state();

    let state = app.read();
    let active = state.active_view;
    let cart_len = state.cart.len();
    let cart_open = state.cart_open;
    drop(state);

    rsx! {
        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "brand",
                    span { class: "brand-mark", "KF" }
                    span { class: "brand-name", "KitchenFlow" }
                }
                nav { class: "sidebar-nav",
                    for tab in ViewTab::all() {
                        SidebarItem { tab: *tab, active: active == *tab }
                    }
                }
                div { class: "sidebar-footer",
                    p { class: "user-name", "Josiah B." }
                    p { class: "user-role", "Executive Chef" }
                }
            }

            div { class: "app-main",
                header { class: "app-header",
                    h2 { "Welcome back, Josiah" }
                    button {
                        class: "cart-button",
                        onclick: move |_| app.write().open_cart(),
                        "Cart ({cart_len})"
                    }
                }
                main { class: "view-canvas",
                    match active {
                        ViewTab::Dashboard => rsx! { DashboardView {} },
                        ViewTab::Suppliers => rsx! { SuppliersView {} },
                        ViewTab::Chat => rsx! { ChatView {} },
                        ViewTab::Orders => rsx! { OrdersView {} },
                        ViewTab::Receiving => rsx! { ReceivingView {} },
                    }
                }
            }

            if cart_open {
                CartDrawer {}
            }
        }
    }
}

#[component]
fn SidebarItem(tab: ViewTab, active: bool) -> Element {
    let mut app = use_app_state();
    let label = tab.label();

    rsx! {
        button {
            class: if active { "sidebar-item active" } else { "sidebar-item" },
            onclick: move |_| app.write().set_view(tab),
            "{label}"
        }
    }
}

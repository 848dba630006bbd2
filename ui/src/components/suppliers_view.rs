use dioxus::prelude::*;

use kitchenflow_common::currency::format_cents;
use kitchenflow_common::product::Product;
use kitchenflow_common::supplier::SupplierId;

use super::app_state::use_app_state;

/// Supplier browsing: vendor cards, and the expanded catalog with cart
/// quantity steppers for the selected supplier.
#[component]
pub fn SuppliersView() -> Element {
    let app = use_app_state();

    let state = app.read();
    let selected = state.selected_supplier.clone();
    let suppliers = state.suppliers.clone();
    drop(state);

    if let Some(supplier_id) = selected {
        return rsx! { SupplierCatalog { supplier_id } };
    }

    rsx! {
        div { class: "suppliers-view",
            h2 { "Suppliers" }
            div { class: "supplier-grid",
                for supplier in suppliers.iter() {
                    {
                        let id = supplier.id.clone();
                        let mut app = app;
                        rsx! {
                            button { class: "supplier-card",
                                key: "{supplier.id}",
                                onclick: move |_| app.write().select_supplier(Some(id.clone())),
                                img { class: "supplier-logo", src: "{supplier.logo_url}" }
                                h3 { "{supplier.name}" }
                                p { class: "supplier-category", "{supplier.category}" }
                                span { class: "supplier-rating", "{supplier.rating}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SupplierCatalog(supplier_id: SupplierId) -> Element {
    let mut app = use_app_state();

    let state = app.read();
    let supplier_name = state
        .supplier(&supplier_id)
        .map(|s| s.name.clone())
        .unwrap_or_default();
    // (product, current cart quantity)
    let catalog: Vec<(Product, u32)> = state
        .catalog_of(&supplier_id)
        .into_iter()
        .map(|p| (p.clone(), state.cart.quantity_of(&p.id)))
        .collect();
    let cart_len = state.cart.len();
    drop(state);

    rsx! {
        div { class: "supplier-catalog",
            div { class: "catalog-header",
                button {
                    class: "back-button",
                    onclick: move |_| app.write().select_supplier(None),
                    "Back"
                }
                h2 { "{supplier_name}" }
                button {
                    class: "open-cart-button",
                    onclick: move |_| app.write().open_cart(),
                    "Cart ({cart_len})"
                }
            }

            if catalog.is_empty() {
                p { class: "empty-state", "No products listed for this supplier." }
            }
            div { class: "product-grid",
                for (product, quantity) in catalog.into_iter() {
                    ProductCard { product, quantity }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product, quantity: u32) -> Element {
    let mut app = use_app_state();
    let price = format_cents(product.price_cents);

    let dec = {
        let product = product.clone();
        move |_| {
            app.write()
                .set_cart_quantity(&product, quantity.saturating_sub(1));
        }
    };
    let inc = {
        let product = product.clone();
        move |_| {
            app.write().set_cart_quantity(&product, quantity + 1);
        }
    };

    rsx! {
        div { class: "product-card",
            key: "{product.id}",
            img { class: "product-image", src: "{product.image_url}" }
            h4 { "{product.name}" }
            p { class: "product-unit", "{product.unit}" }
            p { class: "product-price", "{price}" }
            div { class: "quantity-stepper",
                if quantity > 0 {
                    button { class: "stepper-button", onclick: dec, "-" }
                    span { class: "stepper-count", "{quantity}" }
                }
                button { class: "stepper-button add", onclick: inc, "+" }
            }
        }
    }
}

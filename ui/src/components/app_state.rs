use dioxus::prelude::*;

use kitchenflow_common::state::AppState;

/// The shared application state, provided as context at the top of the
/// app. All mutations go through `AppState` entry points via
/// `use_app_state().write()`.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

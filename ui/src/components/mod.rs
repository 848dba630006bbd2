pub mod app;
pub mod app_state;
pub mod cart_drawer;
pub mod chat_view;
pub mod dashboard_view;
pub mod orders_view;
pub mod receiving_view;
pub mod suppliers_view;

pub mod analytics;
pub mod cart;
pub mod currency;
pub mod message;
pub mod order;
pub mod product;
pub mod receiving;
pub mod seed;
pub mod state;
pub mod supplier;

pub mod config;
pub mod format;
pub mod order_store;

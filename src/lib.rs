pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::shopify::ShopifyClient;
pub use config::AppConfig;
pub use crate::core::transform::transform_order;
pub use utils::error::{OrderApiError, Result};

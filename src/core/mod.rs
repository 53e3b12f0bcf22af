pub mod classify;
pub mod transform;

pub use crate::domain::model::{AccessoryRecord, BikeRecord, LineItem, Order, TransformedOrder};
pub use crate::domain::ports::OrderSource;
pub use crate::utils::error::Result;

use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream commerce platform holding authoritative order records.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Look up an order by its human-facing order number.
    ///
    /// Returns the raw order document so that shape problems surface in the
    /// transform step rather than failing the fetch.
    async fn find_by_number(&self, order_number: &str) -> Result<Option<serde_json::Value>>;
}

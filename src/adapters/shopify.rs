//! Shopify admin REST adapter for the `OrderSource` port.

use crate::config::AppConfig;
use crate::domain::ports::OrderSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Fields requested from the upstream orders endpoint.
const ORDER_FIELDS: &str = "id,line_items,name,total_price";

pub struct ShopifyClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OrdersEnvelope {
    orders: Vec<serde_json::Value>,
}

impl ShopifyClient {
    /// The base URL carries the admin credentials; tests point it at a
    /// local mock server instead.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.shopify_base_url())
    }
}

#[async_trait]
impl OrderSource for ShopifyClient {
    async fn find_by_number(&self, order_number: &str) -> Result<Option<serde_json::Value>> {
        let url = format!("{}/orders.json", self.base_url);

        tracing::debug!("Querying upstream orders by name #{}", order_number);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("name", format!("#{order_number}")),
                ("status", "any".to_string()),
                ("fields", ORDER_FIELDS.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let envelope: OrdersEnvelope = response.json().await?;
        tracing::debug!("Upstream returned {} matching order(s)", envelope.orders.len());

        // Only the first match is ever used, even if more come back.
        Ok(envelope.orders.into_iter().next())
    }
}

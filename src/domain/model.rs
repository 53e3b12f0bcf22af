use serde::{Deserialize, Deserializer, Serialize};

/// One line item as delivered by the upstream platform. Read-only input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub title: String,
    #[serde(default)]
    pub variant_title: Option<String>,
    /// Upstream sends prices as decimal strings, but numbers show up too.
    #[serde(deserialize_with = "price_as_string")]
    pub price: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// The single bike extracted from an order. First qualifying line item wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BikeRecord {
    pub model: String,
    pub price: i64,
    pub bike_type_id: u32,
    pub bike_colour_id: u32,
    pub brand_id: u32,
    pub bike_size_id: u32,
}

/// One accessory per non-bike line item, in source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessoryRecord {
    pub category: String,
    pub category_id: u32,
    pub description: String,
    pub quantity: String,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformedOrder {
    pub status: bool,
    pub bike: Option<BikeRecord>,
    pub accessories: Vec<AccessoryRecord>,
}

fn price_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number for price, got {other}"
        ))),
    }
}

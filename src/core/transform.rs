//! Reshapes one upstream order into the normalized bike + accessories
//! record. All-or-nothing: any parse or shape problem fails the whole
//! transform, never a partial result.

use crate::core::classify;
use crate::domain::model::{AccessoryRecord, BikeRecord, LineItem, Order, TransformedOrder};
use crate::utils::error::{OrderApiError, Result};
use serde::Deserialize;

/// Fixed brand code for every bike sold through this storefront.
pub const BRAND_ID: u32 = 317;

const VARIANT_SEPARATOR: &str = " / ";

/// Transform a raw order document as returned by the upstream platform.
///
/// Line items are walked in their given order. The first item whose title
/// contains "bike" or "package" becomes the bike; items that are not
/// bike-shaped become accessories in source order. A bike-shaped item
/// arriving after the bike has been found matches neither arm and is
/// dropped entirely, which downstream consumers rely on.
pub fn transform_order(raw: &serde_json::Value) -> Result<TransformedOrder> {
    let order = Order::deserialize(raw).map_err(|e| OrderApiError::ProcessingError {
        message: format!("unexpected order shape: {e}"),
    })?;

    let mut bike = None;
    let mut accessories = Vec::new();

    for item in &order.line_items {
        let bike_shaped = is_bike_shaped(&item.title);
        if bike.is_none() && bike_shaped {
            bike = Some(build_bike(item)?);
        } else if !bike_shaped {
            accessories.push(build_accessory(item)?);
        }
    }

    Ok(TransformedOrder {
        status: true,
        bike,
        accessories,
    })
}

fn is_bike_shaped(title: &str) -> bool {
    let title = title.to_lowercase();
    title.contains("bike") || title.contains("package")
}

fn build_bike(item: &LineItem) -> Result<BikeRecord> {
    let (size, colour) = split_variant(item.variant_title.as_deref());

    Ok(BikeRecord {
        model: item.title.clone(),
        price: rounded_price(&item.price)?,
        bike_type_id: classify::bike_type_id(Some(item.title.as_str())),
        bike_colour_id: classify::bike_colour_id(colour),
        brand_id: BRAND_ID,
        bike_size_id: classify::bike_size_id(size),
    })
}

fn build_accessory(item: &LineItem) -> Result<AccessoryRecord> {
    Ok(AccessoryRecord {
        category: "Accessory".to_string(),
        category_id: classify::accessory_category_id(Some(item.title.as_str())),
        description: item.title.clone(),
        quantity: item.quantity.to_string(),
        price: rounded_price(&item.price)?,
    })
}

/// Variant titles look like "Large / Red": size first, colour second.
/// Either segment may be missing; the classifier defaults cover that.
fn split_variant(variant_title: Option<&str>) -> (Option<&str>, Option<&str>) {
    match variant_title {
        Some(v) => {
            let mut parts = v.split(VARIANT_SEPARATOR);
            (parts.next(), parts.next())
        }
        None => (None, None),
    }
}

fn rounded_price(raw: &str) -> Result<i64> {
    let value: f64 = raw.parse().map_err(|_| OrderApiError::ProcessingError {
        message: format!("unparseable price: {raw:?}"),
    })?;
    Ok(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(line_items: serde_json::Value) -> serde_json::Value {
        json!({ "id": 1, "name": "#1001", "line_items": line_items })
    }

    #[test]
    fn bike_and_accessory_are_split() {
        let raw = order(json!([
            {"title": "Electric Cargo Bike", "variant_title": "Large / Red", "price": "999.50", "quantity": 1},
            {"title": "Helmet Pro", "price": "45.00", "quantity": 1}
        ]));

        let result = transform_order(&raw).unwrap();

        assert!(result.status);
        assert_eq!(
            result.bike,
            Some(BikeRecord {
                model: "Electric Cargo Bike".to_string(),
                price: 1000,
                bike_type_id: 2,
                bike_colour_id: 2,
                brand_id: 317,
                bike_size_id: 3,
            })
        );
        assert_eq!(
            result.accessories,
            vec![AccessoryRecord {
                category: "Accessory".to_string(),
                category_id: 1,
                description: "Helmet Pro".to_string(),
                quantity: "1".to_string(),
                price: 45,
            }]
        );
    }

    #[test]
    fn second_bike_shaped_item_is_dropped_entirely() {
        let raw = order(json!([
            {"title": "City Bike", "variant_title": "Medium / Blue", "price": "500.00", "quantity": 1},
            {"title": "Spare Bike", "variant_title": "Small / Red", "price": "400.00", "quantity": 1},
            {"title": "Bell", "price": "10.00", "quantity": 1}
        ]));

        let result = transform_order(&raw).unwrap();

        assert_eq!(result.bike.as_ref().unwrap().model, "City Bike");
        assert_eq!(result.accessories.len(), 1);
        assert_eq!(result.accessories[0].description, "Bell");
    }

    #[test]
    fn accessories_preserve_line_item_order() {
        let raw = order(json!([
            {"title": "Bell", "price": "10.00", "quantity": 1},
            {"title": "Helmet Pro", "price": "45.00", "quantity": 2},
            {"title": "Floor pump", "price": "25.49", "quantity": 1}
        ]));

        let result = transform_order(&raw).unwrap();

        assert!(result.bike.is_none());
        let descriptions: Vec<&str> = result
            .accessories
            .iter()
            .map(|a| a.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Bell", "Helmet Pro", "Floor pump"]);
        assert_eq!(result.accessories[1].quantity, "2");
        assert_eq!(result.accessories[2].price, 25);
    }

    #[test]
    fn package_titles_count_as_bikes() {
        let raw = order(json!([
            {"title": "Commuter Package", "variant_title": "56cm / Black", "price": "1200.00", "quantity": 1}
        ]));

        let result = transform_order(&raw).unwrap();

        let bike = result.bike.unwrap();
        assert_eq!(bike.model, "Commuter Package");
        assert_eq!(bike.bike_type_id, 1);
        assert_eq!(bike.bike_size_id, 9);
        assert_eq!(bike.bike_colour_id, 7);
    }

    #[test]
    fn missing_variant_title_falls_back_to_defaults() {
        let raw = order(json!([
            {"title": "City Bike", "price": "500.00", "quantity": 1}
        ]));

        let bike = transform_order(&raw).unwrap().bike.unwrap();
        assert_eq!(bike.bike_colour_id, 1);
        assert_eq!(bike.bike_size_id, 12);
    }

    #[test]
    fn single_segment_variant_title_sets_size_only() {
        let raw = order(json!([
            {"title": "City Bike", "variant_title": "Large", "price": "500.00", "quantity": 1}
        ]));

        let bike = transform_order(&raw).unwrap().bike.unwrap();
        assert_eq!(bike.bike_size_id, 3);
        assert_eq!(bike.bike_colour_id, 1);
    }

    #[test]
    fn malformed_price_fails_the_whole_transform() {
        let raw = order(json!([
            {"title": "Bell", "price": "ten euro", "quantity": 1}
        ]));

        let err = transform_order(&raw).unwrap_err();
        assert!(matches!(err, OrderApiError::ProcessingError { .. }));
    }

    #[test]
    fn unexpected_order_shape_fails_the_transform() {
        let raw = json!({"line_items": [{"title": "Bell", "price": "10.00"}]});

        // quantity is missing
        let err = transform_order(&raw).unwrap_err();
        assert!(matches!(err, OrderApiError::ProcessingError { .. }));
    }

    #[test]
    fn empty_order_yields_no_bike_and_no_accessories() {
        let result = transform_order(&order(json!([]))).unwrap();

        assert!(result.status);
        assert!(result.bike.is_none());
        assert!(result.accessories.is_empty());
    }

    #[test]
    fn transform_is_idempotent() {
        let raw = order(json!([
            {"title": "Electric Bike", "variant_title": "52cm / Grey", "price": "1499.99", "quantity": 1},
            {"title": "Repair kits deluxe", "price": "19.99", "quantity": 3}
        ]));

        let first = transform_order(&raw).unwrap();
        let second = transform_order(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn prices_round_to_nearest_unit() {
        let raw = order(json!([
            {"title": "Bell", "price": "10.49", "quantity": 1},
            {"title": "Mirror", "price": "10.50", "quantity": 1}
        ]));

        let result = transform_order(&raw).unwrap();
        assert_eq!(result.accessories[0].price, 10);
        assert_eq!(result.accessories[1].price, 11);
    }
}

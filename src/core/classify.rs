//! Static classification tables mapping free-text item attributes to the
//! integer codes used by the downstream bike registry.
//!
//! Every lookup is total: unknown or missing input falls through to the
//! documented default instead of failing. Keys are stored lower-case and
//! inputs are lower-cased before comparison.

/// Default colour when the fragment is missing or unrecognized (blue).
pub const DEFAULT_COLOUR_ID: u32 = 1;
/// Default size when the fragment is missing or unrecognized (unisize).
pub const DEFAULT_SIZE_ID: u32 = 12;
/// Default accessory category when no name matches (Accessories).
pub const DEFAULT_CATEGORY_ID: u32 = 12;

pub const BIKE_TYPE_REGULAR: u32 = 1;
pub const BIKE_TYPE_ELECTRIC: u32 = 2;
pub const BIKE_TYPE_CARGO: u32 = 3;

// From the reference CSV data.
const BIKE_COLOURS: [(&str, u32); 11] = [
    ("blue", 1),
    ("red", 2),
    ("yellow", 3),
    ("green", 4),
    ("orange", 5),
    ("purple", 6),
    ("black", 7),
    ("white", 8),
    ("grey", 9),
    ("silver", 10),
    ("pink", 11),
];

const BIKE_SIZES: [(&str, u32); 12] = [
    ("small", 1),
    ("medium", 2),
    ("large", 3),
    ("x large", 4),
    ("48cm", 5),
    ("50cm", 6),
    ("52cm", 7),
    ("54cm", 8),
    ("56cm", 9),
    ("58cm", 10),
    ("60cm", 11),
    ("unisize", 12),
];

// Ordered slice, not a map: when a title matches several category names the
// first entry here wins, and that order is part of the contract.
const ACCESSORY_CATEGORIES: [(&str, u32); 13] = [
    ("helmet", 1),
    ("lock", 2),
    ("lights", 3),
    ("mudguards", 4),
    ("panniers and luggage carriers", 5),
    ("reflective clothing", 6),
    ("pump", 7),
    ("bell", 8),
    ("mirror", 9),
    ("cycle clips", 10),
    ("repair kits", 11),
    ("accessories", 12),
    ("reflectors", 13),
];

/// Colour code for a variant-title colour fragment.
pub fn bike_colour_id(colour: Option<&str>) -> u32 {
    lookup_exact(&BIKE_COLOURS, colour).unwrap_or(DEFAULT_COLOUR_ID)
}

/// Size code for a variant-title size fragment.
pub fn bike_size_id(size: Option<&str>) -> u32 {
    lookup_exact(&BIKE_SIZES, size).unwrap_or(DEFAULT_SIZE_ID)
}

/// Bike type from the item title. "electric" is checked before "cargo", so
/// an electric cargo bike classifies as electric.
pub fn bike_type_id(title: Option<&str>) -> u32 {
    let Some(title) = title else {
        return BIKE_TYPE_REGULAR;
    };
    let title = title.to_lowercase();
    if title.contains("electric") {
        BIKE_TYPE_ELECTRIC
    } else if title.contains("cargo") {
        BIKE_TYPE_CARGO
    } else {
        BIKE_TYPE_REGULAR
    }
}

/// Accessory category from the item title, first substring match in table
/// order.
pub fn accessory_category_id(title: Option<&str>) -> u32 {
    let Some(title) = title else {
        return DEFAULT_CATEGORY_ID;
    };
    let title = title.to_lowercase();
    ACCESSORY_CATEGORIES
        .iter()
        .find(|(name, _)| title.contains(name))
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_CATEGORY_ID)
}

fn lookup_exact(table: &[(&str, u32)], key: Option<&str>) -> Option<u32> {
    let key = key?.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, id)| *id)
}

use serde::{Deserialize, Serialize};

/// Core catalog entry. Field names follow the wire format (camelCase), so a
/// loaded product serializes back out byte-compatible with the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub brand: String,
    pub name: String,
    pub description: String,
    pub price: ProductPrice,
}

/// Price block carried through from the catalog data verbatim. Nothing in
/// the service inspects individual price fields, so the shape stays opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductPrice(pub serde_json::Value);

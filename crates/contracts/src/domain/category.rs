use serde::{Deserialize, Serialize};

/// Product category. `name` is the join key used by `Product::category`.
/// `product_count` is static catalog data and is not reconciled against the
/// live product set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub product_count: u32,
    pub color: String,
}

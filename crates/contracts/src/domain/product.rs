use serde::{Deserialize, Serialize};

// ============================================================================
// Availability
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    InStock,
    LowStock,
    OutOfStock,
}

/// Derived stock-level classification. Computed on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub status: AvailabilityStatus,
    pub label: String,
    pub color: String,
}

impl Availability {
    fn new(status: AvailabilityStatus, label: &str, color: &str) -> Self {
        Self {
            status,
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Classify a stock level against its low-stock threshold.
///
/// The boundary `stock == low_threshold` counts as low stock. Stock is
/// unsigned, so the negative case cannot occur.
pub fn availability_for(stock: u32, low_threshold: u32) -> Availability {
    if stock == 0 {
        return Availability::new(AvailabilityStatus::OutOfStock, "Out of Stock", "#dc3545");
    }
    if stock <= low_threshold {
        return Availability::new(AvailabilityStatus::LowStock, "Low Stock", "#ffc107");
    }
    Availability::new(AvailabilityStatus::InStock, "In Stock", "#28a745")
}

// ============================================================================
// Product
// ============================================================================

/// Catalog entry. `category` is denormalized: it is matched against
/// `Category::name` by case-insensitive string equality, there is no foreign
/// key. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_id: String,
    pub description: String,
    pub price: i64,
    pub unit: String,
    pub stock: u32,
    pub low_stock_threshold: u32,
    pub is_featured: bool,
    pub image: String,
}

impl Product {
    pub fn availability(&self) -> Availability {
        availability_for(self.stock, self.low_stock_threshold)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= self.low_stock_threshold
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}

/// Product as served to consumers: the catalog entry plus its derived
/// availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithAvailability {
    #[serde(flatten)]
    pub product: Product,
    pub availability: Availability,
}

impl From<Product> for ProductWithAvailability {
    fn from(product: Product) -> Self {
        let availability = product.availability();
        Self {
            product,
            availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stock_is_out_of_stock() {
        let a = availability_for(0, 10);
        assert_eq!(a.status, AvailabilityStatus::OutOfStock);
        assert_eq!(a.label, "Out of Stock");
    }

    #[test]
    fn threshold_boundary_is_low_stock_not_in_stock() {
        let a = availability_for(10, 10);
        assert_eq!(a.status, AvailabilityStatus::LowStock);
        let a = availability_for(11, 10);
        assert_eq!(a.status, AvailabilityStatus::InStock);
    }

    #[test]
    fn every_pair_maps_to_exactly_one_status() {
        for stock in 0..=20u32 {
            for threshold in 0..=20u32 {
                let status = availability_for(stock, threshold).status;
                let expected = if stock == 0 {
                    AvailabilityStatus::OutOfStock
                } else if stock <= threshold {
                    AvailabilityStatus::LowStock
                } else {
                    AvailabilityStatus::InStock
                };
                assert_eq!(status, expected, "stock={stock} threshold={threshold}");
            }
        }
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&AvailabilityStatus::LowStock).unwrap();
        assert_eq!(json, "\"low-stock\"");
    }

    #[test]
    fn wire_shape_flattens_product_fields() {
        let product = Product {
            id: "prod-x".into(),
            name: "Test".into(),
            category: "Steel Furniture".into(),
            category_id: "cat-002".into(),
            description: "d".into(),
            price: 100,
            unit: "piece".into(),
            stock: 5,
            low_stock_threshold: 10,
            is_featured: false,
            image: String::new(),
        };
        let json = serde_json::to_value(ProductWithAvailability::from(product)).unwrap();
        assert_eq!(json["lowStockThreshold"], 10);
        assert_eq!(json["availability"]["status"], "low-stock");
    }
}

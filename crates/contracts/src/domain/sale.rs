use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded offline shop sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub amount: i64,
    pub sold_at: DateTime<Utc>,
}

/// Sale entry form payload. When `amount` is omitted it is derived from the
/// product price at recording time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub product_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub amount: Option<i64>,
}

impl NewSale {
    pub fn validate(&self) -> Result<(), String> {
        if self.product_id.trim().is_empty() {
            return Err("Product is required".into());
        }
        if self.quantity == 0 {
            return Err("Quantity must be at least 1".into());
        }
        Ok(())
    }
}

// ============================================================================
// Product health
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Slow,
    Critical,
}

/// Per-product sales-velocity classification for the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHealth {
    pub id: String,
    pub name: String,
    pub current_stock: u32,
    pub sales_frequency: u32,
    pub health_status: HealthStatus,
}

/// No movement or no stock is critical; under five units in the window is
/// slow.
pub fn classify_health(sales_frequency: u32, current_stock: u32) -> HealthStatus {
    if sales_frequency == 0 || current_stock == 0 {
        HealthStatus::Critical
    } else if sales_frequency < 5 {
        HealthStatus::Slow
    } else {
        HealthStatus::Healthy
    }
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub today_sales: i64,
    pub products_sold: u32,
    pub low_stock_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_classification_boundaries() {
        assert_eq!(classify_health(0, 50), HealthStatus::Critical);
        assert_eq!(classify_health(12, 0), HealthStatus::Critical);
        assert_eq!(classify_health(4, 50), HealthStatus::Slow);
        assert_eq!(classify_health(5, 50), HealthStatus::Healthy);
    }

    #[test]
    fn new_sale_requires_product_and_quantity() {
        let sale = NewSale {
            product_id: "".into(),
            quantity: 1,
            amount: None,
        };
        assert!(sale.validate().is_err());
        let sale = NewSale {
            product_id: "prod-001".into(),
            quantity: 0,
            amount: None,
        };
        assert!(sale.validate().is_err());
        let sale = NewSale {
            product_id: "prod-001".into(),
            quantity: 2,
            amount: Some(5600),
        };
        assert!(sale.validate().is_ok());
    }
}

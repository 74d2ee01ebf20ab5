use std::collections::HashMap;

use contracts::domain::sale::{classify_health, ProductHealth};

use crate::domain::{products, sales};

/// Classify every product by its sales velocity over the last 30 days
/// against current stock.
pub fn summary() -> anyhow::Result<Vec<ProductHealth>> {
    let mut sold_by_product: HashMap<String, u32> = HashMap::new();
    for sale in sales::repository::list_last_30_days()? {
        *sold_by_product.entry(sale.product_id).or_default() += sale.quantity;
    }

    let items = products::repository::list_all()?
        .into_iter()
        .map(|p| {
            let sales_frequency = sold_by_product.get(&p.id).copied().unwrap_or(0);
            ProductHealth {
                health_status: classify_health(sales_frequency, p.stock),
                id: p.id,
                name: p.name,
                current_stock: p.stock,
                sales_frequency,
            }
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::sale::HealthStatus;

    #[test]
    fn products_without_sales_are_critical() {
        let summary = summary().unwrap();
        assert!(!summary.is_empty());
        for item in summary {
            if item.sales_frequency == 0 {
                assert_eq!(item.health_status, HealthStatus::Critical);
            }
        }
    }
}

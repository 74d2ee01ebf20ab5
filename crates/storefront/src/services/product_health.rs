use std::collections::HashMap;

use contracts::domain::sale::{classify_health, ProductHealth};
use contracts::envelope::Envelope;

use crate::accessor::ApiClient;
use crate::fixtures::{products, sales};

/// Per-product health classification over the 30-day sales window.
pub async fn get_product_health_summary(client: &ApiClient) -> Envelope<Vec<ProductHealth>> {
    client
        .fetch_data("/admin/product-health", || {
            Envelope::success(compute_summary())
        })
        .await
}

fn compute_summary() -> Vec<ProductHealth> {
    let mut sold_by_product: HashMap<String, u32> = HashMap::new();
    for sale in sales::last_30_days() {
        *sold_by_product.entry(sale.product_id).or_default() += sale.quantity;
    }

    products::PRODUCTS
        .iter()
        .map(|p| {
            let sales_frequency = sold_by_product.get(&p.id).copied().unwrap_or(0);
            ProductHealth {
                id: p.id.clone(),
                name: p.name.clone(),
                current_stock: p.stock,
                sales_frequency,
                health_status: classify_health(sales_frequency, p.stock),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use contracts::domain::sale::HealthStatus;

    #[tokio::test]
    async fn summary_covers_every_product_once() {
        let client = ApiClient::new(ApiConfig {
            mock_latency_ms: 0,
            ..ApiConfig::default()
        });
        let summary = get_product_health_summary(&client).await.data.unwrap();
        assert_eq!(summary.len(), products::PRODUCTS.len());

        // Products absent from the sales window must be critical.
        for item in &summary {
            if item.sales_frequency == 0 {
                assert_eq!(item.health_status, HealthStatus::Critical);
            }
        }
    }
}

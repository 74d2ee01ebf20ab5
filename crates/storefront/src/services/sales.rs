use chrono::Utc;
use contracts::domain::sale::{NewSale, Sale};
use contracts::envelope::{Envelope, ErrorCode};
use reqwest::Method;
use uuid::Uuid;

use crate::accessor::ApiClient;
use crate::fixtures::{products, sales};

/// Record an offline shop sale. The mock branch derives the amount from the
/// catalog price when the form leaves it blank.
pub async fn record_sale(client: &ApiClient, new_sale: &NewSale) -> Envelope<Sale> {
    client
        .post_data("/sales", new_sale, Method::POST, |body| {
            if let Err(message) = body.validate() {
                return Envelope::error(message, ErrorCode::Validation);
            }
            let product = match products::by_id(&body.product_id) {
                Some(p) => p.product,
                None => return Envelope::not_found("Product not found"),
            };
            let amount = body
                .amount
                .unwrap_or(product.price * body.quantity as i64);
            Envelope::success_with_message(
                Sale {
                    id: Uuid::new_v4(),
                    product_id: product.id,
                    product_name: product.name,
                    quantity: body.quantity,
                    amount,
                    sold_at: Utc::now(),
                },
                "Sale recorded",
            )
        })
        .await
}

/// Most recent sales, newest first
pub async fn get_recent_sales(client: &ApiClient, limit: usize) -> Envelope<Vec<Sale>> {
    let endpoint = format!("/sales/recent?limit={}", limit);
    client
        .fetch_data(&endpoint, || Envelope::success(sales::recent(limit)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig {
            mock_latency_ms: 0,
            ..ApiConfig::default()
        })
    }

    #[tokio::test]
    async fn amount_defaults_to_price_times_quantity() {
        let env = record_sale(
            &client(),
            &NewSale {
                product_id: "prod-001".into(),
                quantity: 2,
                amount: None,
            },
        )
        .await;
        let sale = env.data.unwrap();
        assert_eq!(sale.amount, 2800 * 2);
        assert_eq!(sale.product_name, "Orange Niwar Folding Bed");
    }

    #[tokio::test]
    async fn unknown_product_is_a_not_found_envelope() {
        let env = record_sale(
            &client(),
            &NewSale {
                product_id: "prod-999".into(),
                quantity: 1,
                amount: None,
            },
        )
        .await;
        assert!(env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "Product not found");
    }

    #[tokio::test]
    async fn recent_sales_are_newest_first() {
        let env = get_recent_sales(&client(), 5).await;
        let sales = env.data.unwrap();
        assert_eq!(sales.len(), 5);
        for pair in sales.windows(2) {
            assert!(pair[0].sold_at >= pair[1].sold_at);
        }
    }
}

use contracts::domain::forecast::ForecastResponse;
use contracts::envelope::Envelope;

use crate::accessor::ApiClient;
use crate::fixtures::forecast;

/// Next-month demand forecast for a product.
///
/// The remote branch goes through the backend's pass-through proxy, which
/// relays the ML service's body verbatim (not envelope-shaped), so this uses
/// the external-collaborator accessor path.
pub async fn get_forecast(client: &ApiClient, product_id: &str) -> Envelope<ForecastResponse> {
    let endpoint = format!("/adminDashboard/predict/{}", product_id);
    client
        .fetch_external(&endpoint, || match forecast::for_product(product_id) {
            Some(response) => Envelope::success(response),
            None => Envelope::not_found("Product not found in history"),
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[tokio::test]
    async fn forecast_revenue_is_quantity_times_price() {
        let client = ApiClient::new(ApiConfig {
            mock_latency_ms: 0,
            ..ApiConfig::default()
        });
        let forecast = get_forecast(&client, "prod-005").await.data.unwrap();
        let expected = forecast.prediction.predicted_quantity as f64 * forecast.current_price;
        assert!((forecast.prediction.predicted_revenue - expected).abs() < f64::EPSILON);
    }
}

use anyhow::Result;
use reqwest::StatusCode;

/// HTTP client for the external sales-forecast service.
///
/// The service owns the forecast schema; this client never parses bodies,
/// it hands status and bytes back for verbatim relay.
pub struct MlClient {
    client: reqwest::Client,
    base_url: String,
}

impl MlClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// GET `{base_url}/dashboard/{product_id}`.
    ///
    /// A non-2xx answer from the service is still an `Ok`: the proxy relays
    /// it as-is. Only a transport failure (connection refused, timeout)
    /// surfaces as an error.
    pub async fn fetch_dashboard(&self, product_id: &str) -> Result<(StatusCode, Vec<u8>)> {
        let url = format!("{}/dashboard/{}", self.base_url, product_id);
        tracing::info!("Forwarding forecast request to {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }
}

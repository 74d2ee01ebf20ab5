use std::time::Duration;

use contracts::envelope::{Envelope, ErrorCode};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;

/// Failure on the remote branch. Never escapes the accessor: both variants
/// are folded into an error envelope before a caller sees them.
#[derive(Debug, thiserror::Error)]
enum TransportError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

enum DataSource {
    Mock,
    Remote(reqwest::Client),
}

/// Source-switchable data accessor.
///
/// The data source is chosen once at construction from the injected
/// [`ApiConfig`]: mock mode answers every call from the caller-supplied
/// fixture closure after a simulated delay, remote mode issues real HTTP
/// requests against the backend. Callers receive an envelope either way,
/// never an error.
pub struct ApiClient {
    config: ApiConfig,
    source: DataSource,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let source = if config.use_mock_data {
            DataSource::Mock
        } else {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_millis(config.timeout_ms))
                .build()
                .expect("Failed to create HTTP client");
            DataSource::Remote(client)
        };
        Self { config, source }
    }

    /// Accessor over the default configuration (mock data on).
    pub fn with_defaults() -> Self {
        Self::new(ApiConfig::default())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.source, DataSource::Mock)
    }

    /// Read `endpoint`, or serve `mock_fn` when mock data is enabled.
    ///
    /// `mock_fn` must already return a well-formed envelope; it is passed
    /// through verbatim. Remote failures (non-2xx status, connection error,
    /// timeout, unparseable body) come back as a `FETCH_ERROR` envelope.
    pub async fn fetch_data<T, F>(&self, endpoint: &str, mock_fn: F) -> Envelope<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Envelope<T>,
    {
        match &self.source {
            DataSource::Mock => {
                self.simulate_delay().await;
                mock_fn()
            }
            DataSource::Remote(client) => {
                match self.request_enveloped(client, Method::GET, endpoint, None::<&()>).await {
                    Ok(envelope) => envelope,
                    Err(err) => {
                        tracing::warn!("fetch {} failed: {}", endpoint, err);
                        Envelope::error(err.to_string(), ErrorCode::FetchError)
                    }
                }
            }
        }
    }

    /// Mutate through `endpoint` with the given method, or apply
    /// `mock_mutate_fn` to the body when mock data is enabled.
    pub async fn post_data<B, T, F>(
        &self,
        endpoint: &str,
        body: &B,
        method: Method,
        mock_mutate_fn: F,
    ) -> Envelope<T>
    where
        B: Serialize,
        T: DeserializeOwned,
        F: FnOnce(&B) -> Envelope<T>,
    {
        match &self.source {
            DataSource::Mock => {
                self.simulate_delay().await;
                mock_mutate_fn(body)
            }
            DataSource::Remote(client) => {
                match self.request_enveloped(client, method, endpoint, Some(body)).await {
                    Ok(envelope) => envelope,
                    Err(err) => {
                        tracing::warn!("post {} failed: {}", endpoint, err);
                        Envelope::error(err.to_string(), ErrorCode::PostError)
                    }
                }
            }
        }
    }

    /// Read an endpoint whose collaborator does not speak the envelope
    /// contract (the forecast proxy relays the ML service's body verbatim).
    /// The parsed payload is wrapped into a success envelope here instead.
    pub async fn fetch_external<T, F>(&self, endpoint: &str, mock_fn: F) -> Envelope<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Envelope<T>,
    {
        match &self.source {
            DataSource::Mock => {
                self.simulate_delay().await;
                mock_fn()
            }
            DataSource::Remote(client) => {
                match self.request_raw(client, endpoint).await {
                    Ok(payload) => Envelope::success(payload),
                    Err(err) => {
                        tracing::warn!("fetch {} failed: {}", endpoint, err);
                        Envelope::error(err.to_string(), ErrorCode::FetchError)
                    }
                }
            }
        }
    }

    async fn simulate_delay(&self) {
        tokio::time::sleep(Duration::from_millis(self.config.mock_latency_ms)).await;
    }

    async fn request_enveloped<B, T>(
        &self,
        client: &reqwest::Client,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Envelope<T>, TransportError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let mut request = client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn request_raw<T>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
    ) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let response = client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_client() -> ApiClient {
        let config = ApiConfig {
            mock_latency_ms: 0,
            ..ApiConfig::default()
        };
        ApiClient::new(config)
    }

    #[tokio::test]
    async fn mock_branch_returns_closure_result_verbatim() {
        let client = mock_client();
        let env: Envelope<u32> = client
            .fetch_data("/anything", || Envelope::success_with_message(7, "seven"))
            .await;
        assert!(env.success);
        assert_eq!(env.data, Some(7));
        assert_eq!(env.message, "seven");
    }

    #[tokio::test]
    async fn mock_branch_never_rejects() {
        // An error envelope from the closure is still a resolved value.
        let client = mock_client();
        let env: Envelope<u32> = client
            .fetch_data("/anything", || {
                Envelope::error("fixture says no", ErrorCode::Error)
            })
            .await;
        assert!(!env.success);
        assert_eq!(env.data, None);
    }

    #[tokio::test]
    async fn mock_mutation_receives_the_body() {
        let client = mock_client();
        let env: Envelope<String> = client
            .post_data("/echo", &"payload".to_string(), Method::POST, |body| {
                Envelope::success(body.clone())
            })
            .await;
        assert_eq!(env.data.as_deref(), Some("payload"));
    }

    #[tokio::test]
    async fn remote_branch_folds_connection_errors_into_envelope() {
        // Nothing listens on this port; the call must resolve to a
        // FETCH_ERROR envelope rather than an Err.
        let config = ApiConfig {
            use_mock_data: false,
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_ms: 1_000,
            ..ApiConfig::default()
        };
        let client = ApiClient::new(config);
        let env: Envelope<u32> = client
            .fetch_data("/products", || unreachable!("mock branch is off"))
            .await;
        assert!(!env.success);
        assert_eq!(env.error.map(|e| e.code), Some(ErrorCode::FetchError));
    }
}

use serde::Deserialize;

/// Data-source configuration for the service layer.
///
/// An `ApiConfig` is owned by the [`crate::ApiClient`] it is passed to.
/// There is no process-wide config global, so tests can run mock and remote
/// clients side by side without leaking state into each other.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Serve bundled fixtures instead of calling the backend.
    pub use_mock_data: bool,
    /// Backend API root, e.g. `http://localhost:5000/api`.
    pub base_url: String,
    /// Forecast (ML) service root. Reserved for direct access; current
    /// builds reach forecasts through the backend proxy under `base_url`.
    pub ml_url: String,
    /// Request timeout for the remote branch, in milliseconds.
    pub timeout_ms: u64,
    /// Simulated network delay for the mock branch, in milliseconds.
    pub mock_latency_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            use_mock_data: true,
            base_url: "http://localhost:5000/api".to_string(),
            ml_url: "http://localhost:8000/ml".to_string(),
            timeout_ms: 10_000,
            mock_latency_ms: 300,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
use_mock_data = true
base_url = "http://localhost:5000/api"
ml_url = "http://localhost:8000/ml"
timeout_ms = 10000
mock_latency_ms = 300
"#;

/// Load configuration from a storefront.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<ApiConfig> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("storefront.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: ApiConfig = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("storefront.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: ApiConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<ApiConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert!(config.use_mock_data);
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.mock_latency_ms, 300);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: ApiConfig = toml::from_str("use_mock_data = false").unwrap();
        assert!(!config.use_mock_data);
        assert_eq!(config.timeout_ms, 10_000);
    }
}

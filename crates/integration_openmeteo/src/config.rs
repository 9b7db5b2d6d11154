//! Open-Meteo client configuration

use serde::{Deserialize, Serialize};

/// Configuration shared by the geocoding and forecast clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Geocoding API base URL, without the `/v1/search` path
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Forecast API base URL, without the `/v1/forecast` path
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("weather-service/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl OpenMeteoConfig {
    /// Point both APIs at a single base URL, as used with a local mock server
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            geocoding_base_url: base_url.clone(),
            forecast_base_url: base_url,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_apis() {
        let config = OpenMeteoConfig::default();
        assert_eq!(
            config.geocoding_base_url,
            "https://geocoding-api.open-meteo.com"
        );
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("weather-service/"));
    }

    #[test]
    fn with_base_url_sets_both_endpoints() {
        let config = OpenMeteoConfig::with_base_url("http://127.0.0.1:1234");
        assert_eq!(config.geocoding_base_url, "http://127.0.0.1:1234");
        assert_eq!(config.forecast_base_url, "http://127.0.0.1:1234");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let config: OpenMeteoConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com");
    }
}

//! Open-Meteo HTTP client
//!
//! One `reqwest::Client` serves both APIs, so connection pooling, the
//! timeout and the user agent are shared.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{config::OpenMeteoConfig, error::OpenMeteoError};

/// Open-Meteo client implementing [`GeocodingClient`](crate::GeocodingClient)
/// and [`ForecastClient`](crate::ForecastClient)
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, OpenMeteoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| OpenMeteoError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, OpenMeteoError> {
        Self::new(OpenMeteoConfig::default())
    }

    /// The configuration this client was built with
    pub const fn config(&self) -> &OpenMeteoConfig {
        &self.config
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }

    /// Send a request and decode a JSON body, mapping every failure mode
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        api: &'static str,
        request: RequestBuilder,
    ) -> Result<T, OpenMeteoError> {
        let response = request
            .send()
            .await
            .map_err(|e| OpenMeteoError::from_transport(api, &e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(api, %status, "Upstream returned non-success status");
            return Err(OpenMeteoError::RequestFailed {
                api,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                OpenMeteoError::Timeout { api }
            } else {
                OpenMeteoError::parse(api, e.to_string())
            }
        })
    }
}

/// Join a base URL and an absolute path without doubling the slash
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

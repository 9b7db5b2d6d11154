//! Forecast adapter - Implements ForecastPort using integration_openmeteo

use application::{
    error::ApplicationError,
    ports::{ForecastPort, RawForecast},
};
use async_trait::async_trait;
use domain::GeoLocation;
use integration_openmeteo::{CurrentConditions, ForecastClient, OpenMeteoClient, OpenMeteoConfig};
use tracing::instrument;

use super::map_openmeteo_error;

/// Adapter fetching current conditions through the Open-Meteo Forecast API
#[derive(Debug, Clone)]
pub struct ForecastAdapter {
    client: OpenMeteoClient,
}

impl ForecastAdapter {
    /// Wrap an existing client
    pub const fn new(client: OpenMeteoClient) -> Self {
        Self { client }
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenMeteoConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config).map_err(map_openmeteo_error)?;
        Ok(Self::new(client))
    }

    const fn map_current(current: CurrentConditions) -> RawForecast {
        RawForecast {
            temperature: current.temperature_2m,
            humidity: current.relative_humidity_2m,
            weather_code: current.weather_code,
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self))]
    async fn fetch_current(&self, location: GeoLocation) -> Result<RawForecast, ApplicationError> {
        self.client
            .get_current(location.latitude(), location.longitude())
            .await
            .map(Self::map_current)
            .map_err(map_openmeteo_error)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::*;

    fn adapter_for(server: &MockServer) -> ForecastAdapter {
        ForecastAdapter::with_config(OpenMeteoConfig::with_base_url(server.uri())).unwrap()
    }

    fn london() -> GeoLocation {
        GeoLocation::new(51.5085, -0.1257).unwrap()
    }

    #[test]
    fn maps_current_block_fields() {
        let raw = ForecastAdapter::map_current(CurrentConditions {
            temperature_2m: -4.25,
            relative_humidity_2m: 88,
            weather_code: 73,
        });
        assert_eq!(
            raw,
            RawForecast {
                temperature: -4.25,
                humidity: 88,
                weather_code: 73,
            }
        );
    }

    #[tokio::test]
    async fn fetches_current_conditions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "51.5085"))
            .and(query_param("longitude", "-0.1257"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": {
                    "temperature_2m": 15.5,
                    "relative_humidity_2m": 72,
                    "weather_code": 0
                }
            })))
            .mount(&server)
            .await;

        let raw = adapter_for(&server).fetch_current(london()).await.unwrap();

        assert_eq!(
            raw,
            RawForecast {
                temperature: 15.5,
                humidity: 72,
                weather_code: 0,
            }
        );
    }

    #[tokio::test]
    async fn server_error_maps_to_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = adapter_for(&server)
            .fetch_current(london())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApplicationError::Upstream("weather API returned status code: 503".into())
        );
    }

    #[tokio::test]
    async fn connection_failure_maps_to_upstream() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
        drop(listener);

        let err = ForecastAdapter::with_config(OpenMeteoConfig::with_base_url(url))
            .unwrap()
            .fetch_current(london())
            .await
            .unwrap_err();

        assert!(
            matches!(err, ApplicationError::Upstream(ref msg) if msg.starts_with("weather API connection failed")),
            "unexpected error: {err:?}"
        );
    }
}

//! Application state shared across handlers

use std::sync::Arc;

use application::{ApplicationError, WeatherService};
use infrastructure::{AppConfig, ForecastAdapter, GeocodingAdapter};
use integration_openmeteo::OpenMeteoClient;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather lookup service
    pub weather_service: Arc<WeatherService>,
}

impl AppState {
    /// Wrap an already constructed service
    pub fn new(weather_service: WeatherService) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
        }
    }

    /// Wire the Open-Meteo adapters from configuration
    ///
    /// Both adapters share one HTTP client and its connection pool.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config.openmeteo())
            .map_err(|e| ApplicationError::upstream(e.to_string()))?;

        let geocoding = Arc::new(GeocodingAdapter::new(client.clone()));
        let forecast = Arc::new(ForecastAdapter::new(client));

        Ok(Self::new(WeatherService::new(geocoding, forecast)))
    }
}

//! Open-Meteo forecast client
//!
//! Fetches current conditions via
//! `GET /v1/forecast?latitude=..&longitude=..&current=temperature_2m,relative_humidity_2m,weather_code`.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
    client::{OpenMeteoClient, endpoint},
    error::{FORECAST_API, OpenMeteoError},
    models::{CurrentConditions, ForecastResponse},
};

/// Variables requested in the `current` block
pub const CURRENT_VARIABLES: &str = "temperature_2m,relative_humidity_2m,weather_code";

/// Trait for current-conditions clients
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Get the current conditions at a coordinate pair
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, OpenMeteoError>;
}

impl OpenMeteoClient {
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenMeteoError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenMeteoError::InvalidInput(format!(
                "invalid coordinates: {latitude}, {longitude}"
            )));
        }
        Ok(())
    }

    /// Build the forecast URL, coordinates at four decimal places
    fn build_forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}?latitude={latitude:.4}&longitude={longitude:.4}&current={CURRENT_VARIABLES}",
            endpoint(&self.config().forecast_base_url, "/v1/forecast"),
        )
    }
}

#[async_trait]
impl ForecastClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, OpenMeteoError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_forecast_url(latitude, longitude);
        debug!(url = %url, "Fetching current weather");

        let response: ForecastResponse = self.fetch_json(FORECAST_API, self.get(&url)).await?;

        response
            .current
            .ok_or_else(|| OpenMeteoError::parse(FORECAST_API, "missing current block"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpenMeteoConfig;

    fn client() -> OpenMeteoClient {
        OpenMeteoClient::new(OpenMeteoConfig::default()).unwrap()
    }

    #[test]
    fn forecast_url_rounds_coordinates() {
        let url = client().build_forecast_url(51.508_53, -0.125_72);
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=51.5085&longitude=-0.1257\
             &current=temperature_2m,relative_humidity_2m,weather_code"
        );
    }

    #[test]
    fn forecast_url_pads_to_four_places() {
        let url = client().build_forecast_url(10.0, 20.5);
        assert!(url.contains("latitude=10.0000&longitude=20.5000"));
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        assert!(OpenMeteoClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, -180.5).is_err());
        assert!(OpenMeteoClient::validate_coordinates(-90.0, 180.0).is_ok());
    }
}

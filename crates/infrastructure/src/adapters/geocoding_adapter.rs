//! Geocoding adapter - Implements GeocodingPort using integration_openmeteo

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::{GeoLocation, LocationQuery};
use integration_openmeteo::{GeocodingClient, OpenMeteoClient, OpenMeteoConfig};
use tracing::instrument;

use super::map_openmeteo_error;

/// Adapter resolving locations through the Open-Meteo Geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingAdapter {
    client: OpenMeteoClient,
}

impl GeocodingAdapter {
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
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, location: &LocationQuery) -> Result<GeoLocation, ApplicationError> {
        self.client
            .geocode(location.as_str())
            .await
            .map_err(map_openmeteo_error)
    }
}

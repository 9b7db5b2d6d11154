//! Open-Meteo geocoding client
//!
//! Resolves a free-text location name to the coordinates of its best match
//! via `GET /v1/search?name=<name>&count=1`.

use async_trait::async_trait;
use domain::GeoLocation;
use tracing::{debug, instrument};

use crate::{
    client::{OpenMeteoClient, endpoint},
    error::{GEOCODING_API, OpenMeteoError},
    models::GeocodingResponse,
};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a location name to the coordinates of the first match
    ///
    /// The name is sent as given. Further matches are ignored.
    async fn geocode(&self, location: &str) -> Result<GeoLocation, OpenMeteoError>;
}

#[async_trait]
impl GeocodingClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn geocode(&self, location: &str) -> Result<GeoLocation, OpenMeteoError> {
        if location.is_empty() {
            return Err(OpenMeteoError::InvalidInput(
                "location cannot be empty".to_string(),
            ));
        }

        let url = endpoint(&self.config().geocoding_base_url, "/v1/search");
        let request = self
            .get(&url)
            .query(&[("name", location), ("count", "1")]);

        debug!(%url, "Geocoding location");
        let response: GeocodingResponse = self.fetch_json(GEOCODING_API, request).await?;

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| OpenMeteoError::LocationNotFound(location.to_string()))?;

        debug!(
            name = %first.name,
            lat = first.latitude,
            lon = first.longitude,
            "Geocoded location"
        );

        GeoLocation::new(first.latitude, first.longitude)
            .map_err(|e| OpenMeteoError::parse(GEOCODING_API, e.to_string()))
    }
}

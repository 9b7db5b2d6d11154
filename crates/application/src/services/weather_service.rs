//! Weather lookup service
//!
//! Composes the geocoding and forecast ports into a single current-weather
//! lookup. Holds only shared port handles, so one instance serves all
//! requests concurrently.

use std::{fmt, sync::Arc};

use domain::{CurrentWeather, LocationQuery};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{ForecastPort, GeocodingPort},
};

/// Service answering "what is the weather at this location right now"
pub struct WeatherService {
    geocoding: Arc<dyn GeocodingPort>,
    forecast: Arc<dyn ForecastPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(geocoding: Arc<dyn GeocodingPort>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self {
            geocoding,
            forecast,
        }
    }

    /// Look up the current weather for a free-text location
    ///
    /// An empty location fails with `InvalidInput` before any upstream call.
    /// Upstream failures propagate unchanged; no partial result is returned.
    #[instrument(skip(self))]
    pub async fn get_current_weather(
        &self,
        location: &str,
    ) -> Result<CurrentWeather, ApplicationError> {
        let query = LocationQuery::new(location)?;

        let coordinates = self.geocoding.geocode(&query).await?;
        debug!(%coordinates, "Resolved location");

        let raw = self.forecast.fetch_current(coordinates).await?;
        debug!(
            temperature = raw.temperature,
            humidity = raw.humidity,
            weather_code = raw.weather_code,
            "Fetched current conditions"
        );

        Ok(CurrentWeather::from_readings(
            query.into_inner(),
            raw.temperature,
            raw.humidity,
            raw.weather_code,
        ))
    }
}

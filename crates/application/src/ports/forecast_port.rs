//! Forecast port
//!
//! Retrieves current conditions for a pair of coordinates.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Current readings as reported by the forecast provider, not yet classified
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawForecast {
    /// Temperature at 2 m
    pub temperature: f64,
    /// Relative humidity at 2 m, percent
    pub humidity: i64,
    /// Provider-defined WMO weather code
    pub weather_code: i64,
}

/// Port for current-conditions retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the current conditions at a location
    async fn fetch_current(&self, location: GeoLocation) -> Result<RawForecast, ApplicationError>;
}

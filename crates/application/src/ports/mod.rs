//! Ports - Interfaces for the upstream collaborators of a weather lookup

mod forecast_port;
mod geocoding_port;

pub use forecast_port::{ForecastPort, RawForecast};
pub use geocoding_port::GeocodingPort;

#[cfg(test)]
pub use forecast_port::MockForecastPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;

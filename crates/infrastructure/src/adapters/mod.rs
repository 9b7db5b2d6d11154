//! Adapters implementing the application ports on the Open-Meteo clients

mod forecast_adapter;
mod geocoding_adapter;

pub use forecast_adapter::ForecastAdapter;
pub use geocoding_adapter::GeocodingAdapter;

use application::ApplicationError;
use integration_openmeteo::OpenMeteoError;

/// Map an Open-Meteo client error onto the application taxonomy
///
/// The message of every upstream failure is kept verbatim.
pub(crate) fn map_openmeteo_error(err: OpenMeteoError) -> ApplicationError {
    match err {
        OpenMeteoError::InvalidInput(msg) => ApplicationError::InvalidInput(msg),
        OpenMeteoError::LocationNotFound(location) => ApplicationError::NotFound(location),
        other @ (OpenMeteoError::ClientInit(_)
        | OpenMeteoError::ConnectionFailed { .. }
        | OpenMeteoError::Timeout { .. }
        | OpenMeteoError::RequestFailed { .. }
        | OpenMeteoError::ParseError { .. }) => ApplicationError::Upstream(other.to_string()),
    }
}

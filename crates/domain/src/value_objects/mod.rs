//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod location_query;
mod weather_condition;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use location_query::LocationQuery;
pub use weather_condition::{WeatherCondition, classify};

//! Open-Meteo integration
//!
//! Clients for the Open-Meteo Geocoding API and Forecast API
//! (<https://open-meteo.com>). Neither API requires a key.

pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geocoding;
mod models;

pub use client::OpenMeteoClient;
pub use config::OpenMeteoConfig;
pub use error::OpenMeteoError;
pub use forecast::ForecastClient;
pub use geocoding::GeocodingClient;
pub use models::CurrentConditions;

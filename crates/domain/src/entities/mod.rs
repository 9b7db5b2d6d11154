//! Domain entities

mod current_weather;

pub use current_weather::CurrentWeather;

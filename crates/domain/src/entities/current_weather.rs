//! Result of a current-weather lookup

use serde::{Deserialize, Serialize};

use crate::value_objects::WeatherCondition;

/// Current conditions for a caller-supplied location
///
/// Serializes to `{"location", "temperature", "humidity", "condition"}`,
/// with `condition` as its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// The location exactly as the caller supplied it
    pub location: String,
    /// Temperature at 2 m, in the provider's unit (Celsius by default)
    pub temperature: f64,
    /// Relative humidity at 2 m, percent
    pub humidity: i64,
    /// Classified weather condition
    pub condition: WeatherCondition,
}

impl CurrentWeather {
    /// Build a result from raw readings, classifying the weather code
    #[must_use]
    pub fn from_readings(
        location: impl Into<String>,
        temperature: f64,
        humidity: i64,
        weather_code: i64,
    ) -> Self {
        Self {
            location: location.into(),
            temperature,
            humidity,
            condition: WeatherCondition::from_wmo_code(weather_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_readings_classifies_code() {
        let weather = CurrentWeather::from_readings("London", 15.5, 72, 0);
        assert_eq!(weather.location, "London");
        assert!((weather.temperature - 15.5).abs() < f64::EPSILON);
        assert_eq!(weather.humidity, 72);
        assert_eq!(weather.condition, WeatherCondition::ClearSky);
    }

    #[test]
    fn serializes_to_wire_shape() {
        let weather = CurrentWeather::from_readings("London", 15.5, 72, 0);
        let value = serde_json::to_value(&weather).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "location": "London",
                "temperature": 15.5,
                "humidity": 72,
                "condition": "Clear sky"
            })
        );
    }

    #[test]
    fn unknown_code_never_leaks_numeric_value() {
        let weather = CurrentWeather::from_readings("Nowhere", -3.0, 90, 42);
        let json = serde_json::to_string(&weather).unwrap();
        assert!(json.contains("\"condition\":\"Unknown\""));
        assert!(!json.contains("42"));
    }
}

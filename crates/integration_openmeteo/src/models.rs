//! Open-Meteo response models

use serde::{Deserialize, Serialize};

/// Body of `GET /v1/search`
///
/// Open-Meteo omits `results` entirely when nothing matches.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

/// One geocoder match
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResult {
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of `GET /v1/forecast`
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current: Option<CurrentConditions>,
}

/// The `current` block of a forecast response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature at 2 m
    pub temperature_2m: f64,
    /// Relative humidity at 2 m, percent
    pub relative_humidity_2m: i64,
    /// WMO weather code
    pub weather_code: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_response_without_results_is_empty() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn geocoding_response_ignores_extra_fields() {
        let response: GeocodingResponse = serde_json::from_str(
            r#"{"results":[{"id":2643743,"name":"London","latitude":51.5085,"longitude":-0.1257,"country":"United Kingdom"}]}"#,
        )
        .unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].name, "London");
    }

    #[test]
    fn forecast_response_decodes_current_block() {
        let response: ForecastResponse = serde_json::from_str(
            r#"{"latitude":51.5,"current":{"time":"2024-01-15T12:00","interval":900,"temperature_2m":15.5,"relative_humidity_2m":72,"weather_code":0}}"#,
        )
        .unwrap();
        assert_eq!(
            response.current,
            Some(CurrentConditions {
                temperature_2m: 15.5,
                relative_humidity_2m: 72,
                weather_code: 0,
            })
        );
    }

    #[test]
    fn forecast_response_without_current_block() {
        let response: ForecastResponse = serde_json::from_str(r#"{"latitude":51.5}"#).unwrap();
        assert!(response.current.is_none());
    }
}

//! Current weather handler

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::CurrentWeather;
use tracing::{debug, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Message for a missing or empty `location` parameter
pub const LOCATION_REQUIRED: &str = "location query parameter is required";

/// First `location` value in the query string, if any
///
/// Repeated parameters are allowed; later values are ignored.
fn first_location(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find_map(|(key, value)| (key == "location").then_some(value))
}

/// Look up current weather for `?location=`
#[instrument(skip(state, query))]
pub async fn get_weather(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CurrentWeather>, ApiError> {
    let Query(params) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let location = first_location(params)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| ApiError::BadRequest(LOCATION_REQUIRED.to_string()))?;

    debug!(%location, "Weather lookup");

    let weather = state
        .weather_service
        .get_current_weather(&location)
        .await
        .map_err(|e| {
            warn!(%location, error = %e, "Weather lookup failed");
            ApiError::from(e)
        })?;

    Ok(Json(weather))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn first_location_wins() {
        let params = pairs(&[("location", "Paris"), ("location", "Rome")]);
        assert_eq!(first_location(params).as_deref(), Some("Paris"));
    }

    #[test]
    fn other_parameters_are_ignored() {
        let params = pairs(&[("units", "metric"), ("location", "Oslo")]);
        assert_eq!(first_location(params).as_deref(), Some("Oslo"));
    }

    #[test]
    fn empty_first_value_is_kept() {
        let params = pairs(&[("location", ""), ("location", "Rome")]);
        assert_eq!(first_location(params).as_deref(), Some(""));
    }

    #[test]
    fn missing_location() {
        assert_eq!(first_location(pairs(&[("city", "Paris")])), None);
    }
}

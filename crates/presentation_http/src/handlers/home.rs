//! Welcome handler

use axum::Json;
use serde::{Deserialize, Serialize};

/// Text returned by `GET /`
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Weather Service! Use /weather?location=YOUR_CITY to get weather information.";

/// Welcome response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Usage hint for the service root
pub async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

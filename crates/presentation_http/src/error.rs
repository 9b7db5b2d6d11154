//! API error handling
//!
//! Every error leaves the server as `{"error": "<message>"}`.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error is reported with
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput(msg) => Self::BadRequest(msg),
            ApplicationError::NotFound(_) => Self::NotFound(err.to_string()),
            ApplicationError::Upstream(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_errors_map_to_status() {
        let cases = [
            (
                ApplicationError::InvalidInput("location cannot be empty".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApplicationError::NotFound("Atlantis".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApplicationError::Upstream("weather API returned status code: 500".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn not_found_keeps_full_message() {
        let err = ApiError::from(ApplicationError::NotFound("Atlantis".into()));
        assert_eq!(err.to_string(), "no results found for location: Atlantis");
    }

    #[test]
    fn upstream_message_is_passed_through() {
        let err = ApiError::from(ApplicationError::Upstream(
            "geocoding API returned status code: 503".into(),
        ));
        assert_eq!(err.to_string(), "geocoding API returned status code: 503");
    }

    #[test]
    fn response_has_error_status() {
        let response = ApiError::BadRequest("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_response_serializes_single_field() {
        let body = ErrorResponse {
            error: "location query parameter is required".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"error": "location query parameter is required"})
        );
    }
}

//! Open-Meteo error types

use thiserror::Error;

/// Name of the geocoding API in error messages
pub(crate) const GEOCODING_API: &str = "geocoding";
/// Name of the forecast API in error messages
pub(crate) const FORECAST_API: &str = "weather";

/// Errors that can occur while talking to Open-Meteo
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// The HTTP client could not be built
    #[error("HTTP client initialization failed: {0}")]
    ClientInit(String),

    /// The request could not be formed from the given input
    #[error("{0}")]
    InvalidInput(String),

    /// The geocoder returned no results
    #[error("no results found for location: {0}")]
    LocationNotFound(String),

    /// Connection to the API failed
    #[error("{api} API connection failed: {message}")]
    ConnectionFailed {
        /// Which API was called
        api: &'static str,
        /// Transport error text
        message: String,
    },

    /// The API did not answer within the configured timeout
    #[error("{api} API request timed out")]
    Timeout {
        /// Which API was called
        api: &'static str,
    },

    /// The API answered with a non-success status
    #[error("{api} API returned status code: {status}")]
    RequestFailed {
        /// Which API was called
        api: &'static str,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded
    #[error("failed to decode {api} API response: {message}")]
    ParseError {
        /// Which API was called
        api: &'static str,
        /// Decoder error text
        message: String,
    },
}

impl OpenMeteoError {
    /// Classify a transport error from `reqwest`
    pub(crate) fn from_transport(api: &'static str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { api }
        } else {
            Self::ConnectionFailed {
                api,
                message: err.to_string(),
            }
        }
    }

    /// Create a parse error
    pub(crate) fn parse(api: &'static str, message: impl Into<String>) -> Self {
        Self::ParseError {
            api,
            message: message.into(),
        }
    }
}

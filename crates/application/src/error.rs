//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// The caller supplied unusable input
    #[error("{0}")]
    InvalidInput(String),

    /// The geocoder returned no match for the location
    #[error("no results found for location: {0}")]
    NotFound(String),

    /// An upstream API failed, timed out or returned something unreadable
    #[error("{0}")]
    Upstream(String),
}

impl ApplicationError {
    /// Create an upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => Self::InvalidInput(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_location() {
        let err = ApplicationError::NotFound("Atlantis".to_string());
        assert_eq!(err.to_string(), "no results found for location: Atlantis");
    }

    #[test]
    fn upstream_message_is_verbatim() {
        let err = ApplicationError::upstream("weather API returned status code: 503");
        assert_eq!(err.to_string(), "weather API returned status code: 503");
    }

    #[test]
    fn domain_invalid_input_converts() {
        let err: ApplicationError = DomainError::invalid_input("location cannot be empty").into();
        assert_eq!(
            err,
            ApplicationError::InvalidInput("location cannot be empty".to_string())
        );
    }
}

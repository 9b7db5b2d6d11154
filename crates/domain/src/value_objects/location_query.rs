//! Free-text location supplied by a caller
//!
//! The only rule is non-emptiness. The text is kept exactly as given: it is
//! sent to the geocoder verbatim and echoed back in the lookup result.
//!
//! ```
//! use domain::LocationQuery;
//!
//! let query = LocationQuery::new("London").unwrap();
//! assert_eq!(query.as_str(), "London");
//!
//! assert!(LocationQuery::new("").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Message used whenever an empty location is rejected
pub(crate) const EMPTY_LOCATION: &str = "location cannot be empty";

/// A non-empty location name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Create a location query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the text is empty.
    pub fn new(location: impl Into<String>) -> Result<Self, DomainError> {
        let location = location.into();
        if location.is_empty() {
            return Err(DomainError::invalid_input(EMPTY_LOCATION));
        }
        Ok(Self(location))
    }

    /// Get the location as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query and return the original text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        let err = LocationQuery::new("").unwrap_err();
        assert_eq!(err, DomainError::InvalidInput(EMPTY_LOCATION.to_string()));
    }

    #[test]
    fn text_is_not_trimmed_or_normalized() {
        let query = LocationQuery::new("  new york ").unwrap();
        assert_eq!(query.as_str(), "  new york ");
    }

    #[test]
    fn whitespace_only_is_accepted() {
        assert!(LocationQuery::new(" ").is_ok());
    }

    #[test]
    fn into_inner_returns_original() {
        let query = LocationQuery::new("São Paulo").unwrap();
        assert_eq!(query.into_inner(), "São Paulo");
    }

    #[test]
    fn serde_roundtrip_and_rejects_empty() {
        let query: LocationQuery = serde_json::from_str("\"Berlin\"").unwrap();
        assert_eq!(query.to_string(), "Berlin");
        assert_eq!(serde_json::to_string(&query).unwrap(), "\"Berlin\"");
        assert!(serde_json::from_str::<LocationQuery>("\"\"").is_err());
    }
}

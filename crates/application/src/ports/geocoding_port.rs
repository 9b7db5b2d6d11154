//! Geocoding port
//!
//! Resolves a free-text location to coordinates.

use async_trait::async_trait;
use domain::{GeoLocation, LocationQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for location name resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a location to the coordinates of its best match
    ///
    /// Returns `ApplicationError::NotFound` when the geocoder has no match
    /// and `ApplicationError::Upstream` for any transport or decode failure.
    async fn geocode(&self, location: &LocationQuery) -> Result<GeoLocation, ApplicationError>;
}

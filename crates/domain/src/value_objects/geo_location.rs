//! Geographic coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pair of geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Four decimal places, the precision used for upstream requests
impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_values() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(GeoLocation::new(90.1, 0.0), Err(InvalidCoordinates));
        assert_eq!(GeoLocation::new(0.0, -180.5), Err(InvalidCoordinates));
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn accessors_return_inputs() {
        let loc = GeoLocation::new(51.5085, -0.1257).unwrap();
        assert!((loc.latitude() - 51.5085).abs() < f64::EPSILON);
        assert!((loc.longitude() + 0.1257).abs() < f64::EPSILON);
    }

    #[test]
    fn display_uses_four_decimals() {
        let loc = GeoLocation::new(51.508_53, -0.125_74).unwrap();
        assert_eq!(loc.to_string(), "51.5085, -0.1257");
    }

    #[test]
    fn invalid_coordinates_message() {
        let msg = InvalidCoordinates.to_string();
        assert!(msg.contains("latitude"));
        assert!(msg.contains("longitude"));
    }
}

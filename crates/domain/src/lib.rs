//! Domain layer for the weather service
//!
//! Contains the value objects and the result entity of a current-weather
//! lookup, plus the WMO weather-code classifier. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the Open-Meteo clients and
//! provides configuration loading and tracing setup for the server binary.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use crate::config::{AppConfig, ConfigWarning};
pub use telemetry::{LogFormat, init_tracing};

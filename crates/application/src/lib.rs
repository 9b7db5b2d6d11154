//! Application layer - Use cases and orchestration
//!
//! Defines the ports the weather lookup depends on and the service that
//! composes them. Adapters for the ports live in `infrastructure`.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

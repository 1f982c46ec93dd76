//! Embedded dashboards
//!
//! Admin management of embed registrations.

pub mod errors;
pub mod service;

pub use errors::EmbeddedServiceError;
pub use service::*;

//! Dashboards
//!
//! Guest reads of dashboards, charts, datasets and tables, each checked
//! against the guest authorizer.

pub mod errors;
pub mod service;

pub use errors::DashboardsServiceError;
pub use service::*;

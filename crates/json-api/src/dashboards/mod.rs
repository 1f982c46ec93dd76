//! Dashboards

pub(crate) mod errors;
pub(crate) mod get;

//! Dashboards service errors.

use thiserror::Error;
use vista::access::{DashboardAccessDeniedError, SecurityError};

#[derive(Debug, Error)]
pub enum DashboardsServiceError {
    #[error("resource not found")]
    NotFound,

    #[error(transparent)]
    DashboardAccessDenied(#[from] DashboardAccessDeniedError),

    #[error(transparent)]
    Forbidden(#[from] SecurityError),
}

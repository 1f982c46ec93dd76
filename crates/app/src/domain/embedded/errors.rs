//! Embedded dashboards service errors.

use thiserror::Error;
use vista::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum EmbeddedServiceError {
    #[error("dashboard not found")]
    DashboardNotFound,

    #[error("dashboard is not embedded")]
    NotEmbedded,

    #[error("catalog error")]
    Catalog(#[source] CatalogError),
}

impl From<CatalogError> for EmbeddedServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::UnknownDashboard(_) => Self::DashboardNotFound,
            other => Self::Catalog(other),
        }
    }
}

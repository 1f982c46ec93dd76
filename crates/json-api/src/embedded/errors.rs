//! Embedded Dashboard Errors

use salvo::http::StatusError;
use tracing::error;

use vista_app::domain::embedded::EmbeddedServiceError;

pub(crate) fn into_status_error(error: EmbeddedServiceError) -> StatusError {
    match error {
        EmbeddedServiceError::DashboardNotFound => {
            StatusError::not_found().brief("Dashboard not found")
        }
        EmbeddedServiceError::NotEmbedded => {
            StatusError::not_found().brief("Dashboard is not embedded")
        }
        EmbeddedServiceError::Catalog(source) => {
            error!("failed to update embedded dashboard: {source}");

            StatusError::internal_server_error()
        }
    }
}

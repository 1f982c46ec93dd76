//! Guest Token Errors

use salvo::http::StatusError;
use tracing::error;

use vista_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::EmbeddingDisabled => {
            StatusError::forbidden().brief("Embedded dashboards are disabled")
        }
        AuthServiceError::UnknownEmbeddedDashboard(id) => {
            StatusError::bad_request().brief(format!("Unknown embedded dashboard: {id}"))
        }
        AuthServiceError::UnsupportedResourceType(kind) => {
            StatusError::bad_request().brief(format!("Unsupported resource type: {kind}"))
        }
        AuthServiceError::InvalidToken(_) => StatusError::unauthorized(),
        AuthServiceError::Signing(source) => {
            error!("failed to sign guest token: {source}");

            StatusError::internal_server_error()
        }
    }
}

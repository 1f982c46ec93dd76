//! Auth service errors.

use thiserror::Error;

use crate::auth::GuestTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("embedded dashboards are disabled")]
    EmbeddingDisabled,

    #[error("guest token rejected")]
    InvalidToken(#[source] GuestTokenError),

    #[error("no embedded dashboard with uuid {0}")]
    UnknownEmbeddedDashboard(String),

    #[error("guest token resource type {0} is not supported")]
    UnsupportedResourceType(String),

    #[error("guest token could not be signed")]
    Signing(#[source] GuestTokenError),
}

impl From<GuestTokenError> for AuthServiceError {
    fn from(error: GuestTokenError) -> Self {
        match error {
            GuestTokenError::Encode(_) | GuestTokenError::Lifetime(_) => Self::Signing(error),
            GuestTokenError::Invalid(_) | GuestTokenError::WrongType(_) => {
                Self::InvalidToken(error)
            }
        }
    }
}

/// Rejected guest token settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuestTokenSettingsError {
    #[error("guest token secret cannot be empty")]
    EmptySecret,

    #[error("guest token lifetime must be positive, got {0} seconds")]
    NonPositiveLifetime(i64),
}

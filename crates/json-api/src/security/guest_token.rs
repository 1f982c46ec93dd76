//! Issue Guest Token Handler

use std::sync::Arc;

use salvo::{
    http::header::CACHE_CONTROL,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vista::grants::{GuestToken, GuestTokenResource, GuestTokenUser};
use vista_app::auth::IssuedGuestToken;

use crate::{extensions::*, security::errors::into_status_error, state::State};

/// Guest user details
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct GuestUserRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

/// Resource grant
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GuestResourceRequest {
    /// Resource type; only `dashboard` is accepted
    #[serde(rename = "type")]
    pub kind: String,

    /// Embed UUID of the dashboard
    pub id: String,
}

/// Guest token request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GuestTokenRequest {
    #[serde(default)]
    pub user: GuestUserRequest,

    pub resources: Vec<GuestResourceRequest>,
}

impl From<GuestTokenRequest> for GuestToken {
    fn from(request: GuestTokenRequest) -> Self {
        GuestToken {
            user: GuestTokenUser {
                username: request.user.username,
                first_name: request.user.first_name,
                last_name: request.user.last_name,
            },
            resources: request
                .resources
                .into_iter()
                .map(|resource| GuestTokenResource::new(resource.kind, resource.id))
                .collect(),
        }
    }
}

/// Guest token response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GuestTokenResponse {
    /// Signed guest token
    pub token: String,

    /// Expiry (RFC 3339)
    pub expires_at: String,
}

impl From<IssuedGuestToken> for GuestTokenResponse {
    fn from(issued: IssuedGuestToken) -> Self {
        GuestTokenResponse {
            token: issued.token,
            expires_at: issued.expires_at.to_string(),
        }
    }
}

/// Issue Guest Token Handler
///
/// Signs a guest token granting the requested embedded dashboards.
#[endpoint(
    tags("security"),
    summary = "Issue Guest Token",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Guest token issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown embed or unsupported resource type"),
        (status_code = StatusCode::FORBIDDEN, description = "Embedded dashboards are disabled"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<GuestTokenRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<GuestTokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let issued = state
        .app
        .auth
        .issue_guest_token(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(CACHE_CONTROL, "no-store", true)
        .or_500("failed to set cache-control header")?;

    Ok(Json(issued.into()))
}

//! Get Embedded Dashboard Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use vista::catalog::DashboardId;

use crate::{
    embedded::{EmbeddedDashboardResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Get Embedded Dashboard Handler
#[endpoint(
    tags("embedded"),
    summary = "Get Embedded Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Embed registration"),
        (status_code = StatusCode::NOT_FOUND, description = "Dashboard missing or not embedded"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<EmbeddedDashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let embedded = state
        .app
        .embedded
        .get_embedded(DashboardId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(embedded.into()))
}

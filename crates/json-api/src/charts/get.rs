//! Get Chart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vista::catalog::{Chart, ChartId};

use crate::{dashboards::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChartResponse {
    pub id: i64,
    pub name: String,

    /// Dataset the chart queries
    pub datasource_id: i64,
}

impl From<Chart> for ChartResponse {
    fn from(chart: Chart) -> Self {
        ChartResponse {
            id: chart.id.get(),
            name: chart.name,
            datasource_id: chart.datasource.get(),
        }
    }
}

/// Get Chart Handler
///
/// Returns a chart shown on a dashboard the guest token grants.
#[endpoint(
    tags("charts"),
    summary = "Get Chart",
    security(("guest_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Chart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid guest token"),
        (status_code = StatusCode::FORBIDDEN, description = "Chart not reachable from a granted dashboard"),
        (status_code = StatusCode::NOT_FOUND, description = "Chart not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ChartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let chart = state
        .app
        .dashboards
        .get_chart(identity, ChartId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(chart.into()))
}

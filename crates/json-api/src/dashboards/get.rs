//! Get Dashboard Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vista::catalog::{ChartId, Dashboard, DashboardId, DatasetId};

use crate::{dashboards::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    /// Dashboard id
    pub id: i64,

    pub title: String,

    /// URL slug, when set
    pub slug: Option<String>,

    pub published: bool,

    /// Ids of the charts placed on the dashboard
    pub charts: Vec<i64>,

    /// Ids of the datasets targeted by native filters
    pub filter_datasets: Vec<i64>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        DashboardResponse {
            id: dashboard.id.get(),
            filter_datasets: dashboard.filter_datasets().map(DatasetId::get).collect(),
            charts: dashboard.slices.iter().copied().map(ChartId::get).collect(),
            title: dashboard.title,
            slug: dashboard.slug,
            published: dashboard.published,
        }
    }
}

/// Get Dashboard Handler
///
/// Returns a dashboard granted by the caller's guest token.
#[endpoint(
    tags("dashboards"),
    summary = "Get Dashboard",
    security(("guest_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Dashboard"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid guest token"),
        (status_code = StatusCode::FORBIDDEN, description = "Dashboard not granted"),
        (status_code = StatusCode::NOT_FOUND, description = "Dashboard not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let dashboard = state
        .app
        .dashboards
        .get_dashboard(identity, DashboardId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(dashboard.into()))
}

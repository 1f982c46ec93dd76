//! Get Dataset Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vista::catalog::{Dataset, DatasetId};

use crate::{dashboards::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DatasetResponse {
    pub id: i64,

    /// Database connection the dataset reads from
    pub database_id: i64,

    pub schema: Option<String>,
    pub table_name: String,
}

impl From<Dataset> for DatasetResponse {
    fn from(dataset: Dataset) -> Self {
        DatasetResponse {
            id: dataset.id.get(),
            database_id: dataset.database.get(),
            schema: dataset.schema,
            table_name: dataset.table_name,
        }
    }
}

/// Get Dataset Handler
///
/// Returns a dataset used by a dashboard the guest token grants, either
/// through a chart or a native filter.
#[endpoint(
    tags("datasets"),
    summary = "Get Dataset",
    security(("guest_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Dataset"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid guest token"),
        (status_code = StatusCode::FORBIDDEN, description = "Dataset not reachable from a granted dashboard"),
        (status_code = StatusCode::NOT_FOUND, description = "Dataset not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<DatasetResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let dataset = state
        .app
        .dashboards
        .get_dataset(identity, DatasetId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(dataset.into()))
}

//! Get Table Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vista::catalog::{DatabaseId, Table};

use crate::{dashboards::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TableResponse {
    pub database_id: i64,
    pub schema: Option<String>,
    pub table: String,
}

/// Get Table Handler
///
/// Direct table access. Guests are always refused; they may only read data
/// through the dashboards their token grants.
#[endpoint(
    tags("tables"),
    summary = "Get Table",
    security(("guest_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Table"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid guest token"),
        (status_code = StatusCode::FORBIDDEN, description = "Table access refused"),
        (status_code = StatusCode::NOT_FOUND, description = "Database not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    name: PathParam<String>,
    schema: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<TableResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let database = DatabaseId::new(id.into_inner());
    let table = Table {
        schema: schema.into_inner(),
        table: name.into_inner(),
    };

    state
        .app
        .dashboards
        .authorize_table(identity, database, table.clone())
        .await
        .map_err(into_status_error)?;

    Ok(Json(TableResponse {
        database_id: database.get(),
        schema: table.schema,
        table: table.table,
    }))
}

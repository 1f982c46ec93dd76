//! Put Embedded Dashboard Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vista::catalog::DashboardId;

use crate::{
    embedded::{EmbeddedDashboardResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Embed registration request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmbeddedDashboardRequest {
    /// Origins allowed to frame the dashboard; empty allows any
    #[serde(default)]
    pub allowed_domains: Vec<String>,
}

/// Put Embedded Dashboard Handler
///
/// Enables embedding, or replaces the allowed domains of an existing
/// registration without changing its UUID.
#[endpoint(
    tags("embedded"),
    summary = "Enable Embedded Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Embed registration"),
        (status_code = StatusCode::NOT_FOUND, description = "Dashboard not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<EmbeddedDashboardRequest>,
    depot: &mut Depot,
) -> Result<Json<EmbeddedDashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let embedded = state
        .app
        .embedded
        .upsert_embedded(
            DashboardId::new(id.into_inner()),
            json.into_inner().allowed_domains,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(embedded.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vista::fixtures::BIRTHS_DASHBOARD;
    use vista_app::domain::embedded::{EmbeddedServiceError, MockEmbeddedDashboardsService};

    use crate::test_helpers::embedded_service;

    use super::{super::tests::births_embed, *};

    fn make_service(embedded: MockEmbeddedDashboardsService) -> Service {
        embedded_service(embedded, Router::with_path("dashboard/{id}/embedded").put(handler))
    }

    #[tokio::test]
    async fn test_put_embedded_forwards_domains() -> TestResult {
        let mut embedded = MockEmbeddedDashboardsService::new();

        embedded
            .expect_upsert_embedded()
            .once()
            .withf(|id, domains| {
                *id == BIRTHS_DASHBOARD && domains == &["https://example.com".to_string()]
            })
            .return_once(|_, _| Ok(births_embed()));

        let mut res = TestClient::put("http://example.com/dashboard/1/embedded")
            .json(&json!({ "allowed_domains": ["https://example.com"] }))
            .send(&make_service(embedded))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: EmbeddedDashboardResponse = res.take_json().await?;

        assert_eq!(body.dashboard_id, BIRTHS_DASHBOARD.get());

        Ok(())
    }

    #[tokio::test]
    async fn test_put_unknown_dashboard_returns_404() {
        let mut embedded = MockEmbeddedDashboardsService::new();

        embedded
            .expect_upsert_embedded()
            .once()
            .return_once(|_, _| Err(EmbeddedServiceError::DashboardNotFound));

        let res = TestClient::put("http://example.com/dashboard/404/embedded")
            .json(&json!({}))
            .send(&make_service(embedded))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}

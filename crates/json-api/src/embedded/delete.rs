//! Delete Embedded Dashboard Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use vista::catalog::DashboardId;

use crate::{embedded::errors::into_status_error, extensions::*, state::State};

/// Delete Embedded Dashboard Handler
///
/// Disables embedding. Guest tokens naming the old UUID stop granting the
/// dashboard immediately.
#[endpoint(
    tags("embedded"),
    summary = "Disable Embedded Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Embedding disabled"),
        (status_code = StatusCode::NOT_FOUND, description = "Dashboard missing or not embedded"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .embedded
        .delete_embedded(DashboardId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use vista::fixtures::{BIRTHS_DASHBOARD, WORLD_BANK_DASHBOARD};
    use vista_app::domain::embedded::{EmbeddedServiceError, MockEmbeddedDashboardsService};

    use crate::test_helpers::embedded_service;

    use super::*;

    fn make_service(embedded: MockEmbeddedDashboardsService) -> Service {
        embedded_service(
            embedded,
            Router::with_path("dashboard/{id}/embedded").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_embedded_success() {
        let mut embedded = MockEmbeddedDashboardsService::new();

        embedded
            .expect_delete_embedded()
            .once()
            .withf(|id| *id == BIRTHS_DASHBOARD)
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/dashboard/1/embedded")
            .send(&make_service(embedded))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_delete_not_embedded_returns_404() {
        let mut embedded = MockEmbeddedDashboardsService::new();

        embedded
            .expect_delete_embedded()
            .once()
            .withf(|id| *id == WORLD_BANK_DASHBOARD)
            .return_once(|_| Err(EmbeddedServiceError::NotEmbedded));

        let res = TestClient::delete("http://example.com/dashboard/2/embedded")
            .send(&make_service(embedded))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}

//! App Router

use salvo::Router;

use crate::{auth, charts, dashboards, datasets, embedded, healthcheck, security, tables};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/v1")
                .push(admin_router())
                .push(guest_router()),
        )
}

fn admin_router() -> Router {
    Router::new()
        .hoop(auth::admin::handler)
        .push(Router::with_path("security/guest_token").post(security::guest_token::handler))
        .push(
            Router::with_path("dashboard/{id}/embedded")
                .get(embedded::get::handler)
                .put(embedded::put::handler)
                .delete(embedded::delete::handler),
        )
}

fn guest_router() -> Router {
    Router::new()
        .hoop(auth::guest::handler)
        .push(Router::with_path("dashboard/{id}").get(dashboards::get::handler))
        .push(Router::with_path("chart/{id}").get(charts::get::handler))
        .push(Router::with_path("dataset/{id}").get(datasets::get::handler))
        .push(Router::with_path("database/{id}/table/{name}").get(tables::get::handler))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{TEST_ADMIN_TOKEN, strict_state};

    use super::*;

    fn make_service() -> Service {
        Service::new(Router::new().hoop(inject(strict_state())).push(app_router()))
    }

    #[tokio::test]
    async fn test_healthcheck_needs_no_credentials() -> TestResult {
        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains("ok"));

        Ok(())
    }

    #[tokio::test]
    async fn test_guest_routes_without_token_return_401() {
        for path in [
            "dashboard/1",
            "chart/1",
            "dataset/1",
            "database/1/table/birth_names",
        ] {
            let res = TestClient::get(format!("http://example.com/api/v1/{path}"))
                .send(&make_service())
                .await;

            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED), "{path}");
        }
    }

    #[tokio::test]
    async fn test_admin_routes_reject_guest_tokens() {
        let res = TestClient::get("http://example.com/api/v1/dashboard/1/embedded")
            .add_header("X-GuestToken", "signed", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_admin_token_does_not_open_guest_routes() {
        let res = TestClient::get("http://example.com/api/v1/dashboard/1")
            .add_header("Authorization", format!("Bearer {TEST_ADMIN_TOKEN}"), true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }
}

//! Admin bearer middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::debug;

use crate::state::State;

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    if !state.admin_token.matches(token) {
        debug!("admin token rejected");

        res.render(StatusError::unauthorized().brief("Invalid API token"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{TEST_ADMIN_TOKEN, strict_state};

    use super::*;

    #[salvo::handler]
    async fn ok(res: &mut Response) {
        res.render("ok");
    }

    fn make_service() -> Service {
        let router = Router::new()
            .hoop(inject(strict_state()))
            .hoop(handler)
            .push(Router::new().get(ok));

        Service::new(router)
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401() {
        let res = TestClient::get("http://example.com")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_non_bearer_authorization_header_returns_401() {
        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, format!("Basic {TEST_ADMIN_TOKEN}"), true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_wrong_token_returns_401() {
        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer nope", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_valid_token_calls_next() -> TestResult {
        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_ADMIN_TOKEN}"), true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "ok");

        Ok(())
    }
}

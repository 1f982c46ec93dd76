//! Guest token middleware.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::error;
use vista::identity::Identity;
use vista_app::auth::AuthServiceError;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let Some(token) = extract_guest_token(req, &state.guest_token_header) else {
        res.render(StatusError::unauthorized().brief("Missing guest token"));
        ctrl.skip_rest();

        return;
    };

    let guest = match state.app.auth.authenticate_guest(token).await {
        Ok(guest) => guest,
        Err(AuthServiceError::InvalidToken(_)) => {
            res.render(StatusError::unauthorized().brief("Invalid guest token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::EmbeddingDisabled) => {
            res.render(StatusError::forbidden().brief("Embedded dashboards are disabled"));
            ctrl.skip_rest();

            return;
        }
        Err(
            source @ (AuthServiceError::UnknownEmbeddedDashboard(_)
            | AuthServiceError::UnsupportedResourceType(_)
            | AuthServiceError::Signing(_)),
        ) => {
            error!("failed to authenticate guest token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_identity(Identity::Guest(guest));

    ctrl.call_next(req, depot, res).await;
}

fn extract_guest_token<'r>(req: &'r Request, header: &str) -> Option<&'r str> {
    let token = req.headers().get(header)?.to_str().ok()?.trim();

    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use vista::{
        fixtures::BIRTHS_EMBED_UUID,
        grants::{GuestToken, GuestTokenResource, GuestTokenUser},
        identity::{GuestUser, RoleName},
    };
    use vista_app::auth::{GuestTokenError, MockAuthService};

    use crate::test_helpers::{TEST_GUEST_TOKEN_HEADER, state_with_auth};

    use super::*;

    #[salvo::handler]
    async fn echo_guest(depot: &mut Depot, res: &mut Response) {
        let username = match depot.identity_or_401() {
            Ok(Identity::Guest(guest)) => guest.username.clone(),
            Ok(_) | Err(_) => "missing".to_string(),
        };

        res.render(username);
    }

    fn make_service(auth: MockAuthService) -> Service {
        let router = Router::new()
            .hoop(inject(state_with_auth(auth)))
            .hoop(handler)
            .push(Router::new().get(echo_guest));

        Service::new(router)
    }

    fn viewer() -> GuestUser {
        GuestUser::from_token(
            GuestToken {
                user: GuestTokenUser {
                    username: "viewer".to_string(),
                    ..GuestTokenUser::default()
                },
                resources: vec![GuestTokenResource::dashboard(BIRTHS_EMBED_UUID.to_string())],
            },
            vec![RoleName::public()],
        )
    }

    #[tokio::test]
    async fn test_missing_guest_token_returns_401() {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_guest().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_invalid_guest_token_returns_401() {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_guest()
            .once()
            .withf(|token| token == "garbage")
            .return_once(|_| {
                Err(AuthServiceError::InvalidToken(GuestTokenError::WrongType(
                    "user".to_string(),
                )))
            });

        let res = TestClient::get("http://example.com")
            .add_header(TEST_GUEST_TOKEN_HEADER, "garbage", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_disabled_embedding_returns_403() {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_guest()
            .once()
            .return_once(|_| Err(AuthServiceError::EmbeddingDisabled));

        let res = TestClient::get("http://example.com")
            .add_header(TEST_GUEST_TOKEN_HEADER, "token", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn test_valid_guest_token_injects_identity() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_guest()
            .once()
            .withf(|token| token == "signed")
            .return_once(|_| Ok(viewer()));

        let mut res = TestClient::get("http://example.com")
            .add_header(TEST_GUEST_TOKEN_HEADER, "signed", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "viewer");

        Ok(())
    }
}

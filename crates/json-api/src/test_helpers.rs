//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use vista::fixtures;
use vista_app::{
    auth::MockAuthService, context::AppContext, domain::dashboards::MockDashboardsService,
    domain::embedded::MockEmbeddedDashboardsService,
};

use crate::{auth::AdminToken, extensions::*, state::State};

pub(crate) const TEST_ADMIN_TOKEN: &str = "test-admin-token";

pub(crate) const TEST_GUEST_TOKEN_HEADER: &str = "X-GuestToken";

#[salvo::handler]
pub(crate) async fn inject_guest(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(fixtures::authorized_guest());
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_issue_guest_token().never();
    auth.expect_authenticate_guest().never();

    auth
}

pub(crate) fn strict_dashboards_mock() -> MockDashboardsService {
    let mut dashboards = MockDashboardsService::new();

    dashboards.expect_get_dashboard().never();
    dashboards.expect_get_chart().never();
    dashboards.expect_get_dataset().never();
    dashboards.expect_authorize_table().never();

    dashboards
}

pub(crate) fn strict_embedded_mock() -> MockEmbeddedDashboardsService {
    let mut embedded = MockEmbeddedDashboardsService::new();

    embedded.expect_list_embedded().never();
    embedded.expect_get_embedded().never();
    embedded.expect_upsert_embedded().never();
    embedded.expect_delete_embedded().never();

    embedded
}

fn state_with(
    dashboards: MockDashboardsService,
    embedded: MockEmbeddedDashboardsService,
    auth: MockAuthService,
) -> Arc<State> {
    State::shared(
        AppContext {
            dashboards: Arc::new(dashboards),
            embedded: Arc::new(embedded),
            auth: Arc::new(auth),
        },
        AdminToken::new(TEST_ADMIN_TOKEN),
        TEST_GUEST_TOKEN_HEADER.to_string(),
    )
}

pub(crate) fn strict_state() -> Arc<State> {
    state_with(
        strict_dashboards_mock(),
        strict_embedded_mock(),
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_with(strict_dashboards_mock(), strict_embedded_mock(), auth)
}

/// Serve `route` as the fixture's authorized guest.
pub(crate) fn guest_service(dashboards: MockDashboardsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(
                dashboards,
                strict_embedded_mock(),
                strict_auth_mock(),
            )))
            .hoop(inject_guest)
            .push(route),
    )
}

/// Serve `route` with admin services; admin authentication is left to the
/// middleware's own tests.
pub(crate) fn admin_service(
    embedded: MockEmbeddedDashboardsService,
    auth: MockAuthService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_dashboards_mock(), embedded, auth)))
            .push(route),
    )
}

pub(crate) fn embedded_service(embedded: MockEmbeddedDashboardsService, route: Router) -> Service {
    admin_service(embedded, strict_auth_mock(), route)
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    admin_service(strict_embedded_mock(), auth, route)
}

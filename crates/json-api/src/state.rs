//! State

use std::{fmt, sync::Arc};

use vista_app::context::AppContext;

use crate::auth::AdminToken;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) admin_token: AdminToken,
    pub(crate) guest_token_header: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, admin_token: AdminToken, guest_token_header: String) -> Self {
        Self {
            app,
            admin_token,
            guest_token_header,
        }
    }

    #[must_use]
    pub(crate) fn shared(
        app: AppContext,
        admin_token: AdminToken,
        guest_token_header: String,
    ) -> Arc<Self> {
        Arc::new(Self::new(app, admin_token, guest_token_header))
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("admin_token", &self.admin_token)
            .field("guest_token_header", &self.guest_token_header)
            .finish_non_exhaustive()
    }
}

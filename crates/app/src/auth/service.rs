//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;
use uuid::Uuid;
use vista::{
    catalog::DashboardId,
    grants::{GuestToken, GuestTokenResourceType},
    identity::{GuestUser, RoleName},
};

use crate::{
    auth::{AuthServiceError, GuestTokenCodec, GuestTokenSettings, IssuedGuestToken},
    store::CatalogStore,
};

#[derive(Debug, Clone)]
pub struct JwtAuthService {
    store: CatalogStore,
    codec: GuestTokenCodec,
    guest_role: RoleName,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(store: CatalogStore, settings: &GuestTokenSettings) -> Self {
        Self {
            store,
            codec: settings.codec(),
            guest_role: settings.guest_role.clone(),
        }
    }

    async fn resolve_dashboards(
        &self,
        token: &GuestToken,
    ) -> Result<Vec<DashboardId>, AuthServiceError> {
        let catalog = self.store.read().await;

        token
            .resources
            .iter()
            .map(|resource| match &resource.kind {
                GuestTokenResourceType::Dashboard => Uuid::parse_str(&resource.id)
                    .ok()
                    .and_then(|uuid| catalog.embedded_by_uuid(&uuid))
                    .map(|embedded| embedded.dashboard_id)
                    .ok_or_else(|| AuthServiceError::UnknownEmbeddedDashboard(resource.id.clone())),
                GuestTokenResourceType::Other(kind) => {
                    Err(AuthServiceError::UnsupportedResourceType(kind.clone()))
                }
            })
            .collect()
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn issue_guest_token(
        &self,
        token: GuestToken,
    ) -> Result<IssuedGuestToken, AuthServiceError> {
        if !self.store.embedding_enabled() {
            return Err(AuthServiceError::EmbeddingDisabled);
        }

        let dashboards = self.resolve_dashboards(&token).await?;

        let signed = self.codec.issue(token)?;

        Ok(IssuedGuestToken {
            token: signed.token,
            issued_at: signed.issued_at,
            expires_at: signed.expires_at,
            dashboards,
        })
    }

    async fn authenticate_guest(&self, token: &str) -> Result<GuestUser, AuthServiceError> {
        if !self.store.embedding_enabled() {
            return Err(AuthServiceError::EmbeddingDisabled);
        }

        let claims = self.codec.decode(token).inspect_err(|error| {
            debug!(%error, "guest token rejected");
        })?;

        Ok(GuestUser::from_token(
            claims.into_guest_token(),
            vec![self.guest_role.clone()],
        ))
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign a guest token after checking every grant names a registered embed.
    async fn issue_guest_token(
        &self,
        token: GuestToken,
    ) -> Result<IssuedGuestToken, AuthServiceError>;

    /// Verify a raw guest token and build the guest identity it carries.
    async fn authenticate_guest(&self, token: &str) -> Result<GuestUser, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;
    use vista::{
        fixtures::{BIRTHS_DASHBOARD, BIRTHS_EMBED_UUID, UNREGISTERED_EMBED_UUID},
        flags::{FeatureFlag, FeatureFlags},
        grants::{GuestTokenResource, GuestTokenUser},
        identity::PUBLIC_ROLE,
    };

    use crate::test::TestContext;

    use super::*;

    fn births_token() -> GuestToken {
        GuestToken {
            user: GuestTokenUser {
                username: "viewer".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
            resources: vec![GuestTokenResource::dashboard(BIRTHS_EMBED_UUID.to_string())],
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates_as_guest() -> TestResult {
        let ctx = TestContext::new();

        let issued = ctx.auth.issue_guest_token(births_token()).await?;
        let guest = ctx.auth.authenticate_guest(&issued.token).await?;

        assert_eq!(issued.dashboards, vec![BIRTHS_DASHBOARD]);
        assert_eq!(
            issued.expires_at.duration_since(issued.issued_at),
            SignedDuration::from_secs(300)
        );
        assert_eq!(guest.username, "viewer");
        assert_eq!(guest.first_name, "Ada");
        assert!(guest.grants_dashboard(&BIRTHS_EMBED_UUID));
        assert_eq!(guest.roles, vec![RoleName::new(PUBLIC_ROLE)]);

        Ok(())
    }

    #[tokio::test]
    async fn issue_rejects_unregistered_embed() {
        let ctx = TestContext::new();

        let result = ctx
            .auth
            .issue_guest_token(GuestToken {
                user: GuestTokenUser::default(),
                resources: vec![GuestTokenResource::dashboard(UNREGISTERED_EMBED_UUID)],
            })
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::UnknownEmbeddedDashboard(ref id)) if id == UNREGISTERED_EMBED_UUID),
            "expected UnknownEmbeddedDashboard, got {result:?}"
        );
    }

    #[tokio::test]
    async fn issue_rejects_non_dashboard_grant() {
        let ctx = TestContext::new();

        let result = ctx
            .auth
            .issue_guest_token(GuestToken {
                user: GuestTokenUser::default(),
                resources: vec![GuestTokenResource::new("dirt", BIRTHS_EMBED_UUID.to_string())],
            })
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::UnsupportedResourceType(ref kind)) if kind == "dirt"),
            "expected UnsupportedResourceType, got {result:?}"
        );
    }

    #[tokio::test]
    async fn authenticate_rejects_garbage() {
        let ctx = TestContext::new();

        let result = ctx.auth.authenticate_guest("not-a-token").await;

        assert!(matches!(result, Err(AuthServiceError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn disabled_embedding_refuses_issue_and_authentication() -> TestResult {
        let enabled = TestContext::new();
        let issued = enabled.auth.issue_guest_token(births_token()).await?;

        let disabled = TestContext::with_flags(
            FeatureFlags::new().with(FeatureFlag::EmbeddedDashboards, false),
        );

        assert!(matches!(
            disabled.auth.issue_guest_token(births_token()).await,
            Err(AuthServiceError::EmbeddingDisabled)
        ));
        assert!(matches!(
            disabled.auth.authenticate_guest(&issued.token).await,
            Err(AuthServiceError::EmbeddingDisabled)
        ));

        Ok(())
    }
}

//! Request identities.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::{
    grants::{GuestToken, GuestTokenResource, GuestTokenResourceType},
    ids::TypedId,
};

/// Role assigned to guests when none is configured.
pub const PUBLIC_ROLE: &str = "Public";

/// Regular user id.
pub type UserId = TypedId<User>;

/// Role reference by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleName(String);

impl RoleName {
    /// Create a role reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The public role.
    #[must_use]
    pub fn public() -> Self {
        Self::new(PUBLIC_ROLE)
    }

    /// Role name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoleName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Display for RoleName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Interactive, authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User id.
    pub id: UserId,

    /// Login name.
    pub username: String,

    /// Assigned roles.
    pub roles: Vec<RoleName>,
}

/// Non-interactive identity built from a verified guest token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestUser {
    /// Display username from the token.
    pub username: String,

    /// Given name from the token.
    pub first_name: String,

    /// Family name from the token.
    pub last_name: String,

    /// Resource grants in token order.
    pub resources: SmallVec<[GuestTokenResource; 1]>,

    /// Roles granted to every guest.
    pub roles: Vec<RoleName>,
}

impl GuestUser {
    /// Build a guest from a verified token payload.
    #[must_use]
    pub fn from_token(token: GuestToken, roles: Vec<RoleName>) -> Self {
        Self {
            username: token.user.username,
            first_name: token.user.first_name,
            last_name: token.user.last_name,
            resources: token.resources.into_iter().collect(),
            roles,
        }
    }

    /// Whether any grant names the given embed UUID as a dashboard.
    ///
    /// Every grant is inspected; the match may sit anywhere in the list.
    #[must_use]
    pub fn grants_dashboard(&self, embed_uuid: &Uuid) -> bool {
        let expected = embed_uuid.to_string();

        self.resources.iter().any(|resource| {
            resource.kind == GuestTokenResourceType::Dashboard && resource.id == expected
        })
    }
}

/// Identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Logged-in user.
    User(User),

    /// No credentials presented.
    Anonymous,

    /// Guest token holder.
    Guest(GuestUser),
}

impl Identity {
    /// Whether this identity was built from a guest token.
    ///
    /// This says nothing about whether embedding is enabled; use
    /// [`crate::access::GuestAccess::is_guest_user`] for that.
    #[must_use]
    pub const fn is_guest_flagged(&self) -> bool {
        matches!(self, Self::Guest(_))
    }

    /// Roles held by this identity. Guests hold exactly the roles on their
    /// credential; anonymous identities hold none.
    #[must_use]
    pub fn roles(&self) -> &[RoleName] {
        match self {
            Self::User(user) => &user.roles,
            Self::Guest(guest) => &guest.roles,
            Self::Anonymous => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::grants::GuestTokenUser;

    use super::*;

    fn guest(resources: Vec<GuestTokenResource>) -> GuestUser {
        GuestUser::from_token(
            GuestToken {
                user: GuestTokenUser::default(),
                resources,
            },
            vec![RoleName::public()],
        )
    }

    #[test]
    fn grants_dashboard_scans_every_grant() {
        let uuid = Uuid::new_v4();
        let guest = guest(vec![
            GuestTokenResource::dashboard("not-a-real-id"),
            GuestTokenResource::new("dirt", "x"),
            GuestTokenResource::dashboard(uuid.to_string()),
        ]);

        assert!(guest.grants_dashboard(&uuid), "grant at index 2 must match");
    }

    #[test]
    fn grants_dashboard_requires_dashboard_type() {
        let uuid = Uuid::new_v4();
        let guest = guest(vec![GuestTokenResource::new("dirt", uuid.to_string())]);

        assert!(!guest.grants_dashboard(&uuid));
    }

    #[test]
    fn guest_roles_are_the_credential_roles() {
        let identity = Identity::Guest(guest(Vec::new()));

        assert_eq!(identity.roles(), [RoleName::public()]);
        assert!(Identity::Anonymous.roles().is_empty());
    }
}

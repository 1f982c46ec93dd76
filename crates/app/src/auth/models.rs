//! Auth models

use jiff::{SignedDuration, Timestamp};
use vista::{catalog::DashboardId, identity::RoleName};

use crate::auth::{
    DEFAULT_GUEST_TOKEN_AUDIENCE, DEFAULT_GUEST_TOKEN_TTL_SECONDS, GuestTokenCodec,
    GuestTokenSecret, GuestTokenSettingsError,
};

/// Guest token settings shared by the server and the CLI.
#[derive(Debug, Clone)]
pub struct GuestTokenSettings {
    pub secret: GuestTokenSecret,
    pub audience: String,
    pub ttl: SignedDuration,
    pub guest_role: RoleName,
}

impl GuestTokenSettings {
    /// Settings with default audience, lifetime and role.
    #[must_use]
    pub fn new(secret: GuestTokenSecret) -> Self {
        Self {
            secret,
            audience: DEFAULT_GUEST_TOKEN_AUDIENCE.to_string(),
            ttl: SignedDuration::from_secs(DEFAULT_GUEST_TOKEN_TTL_SECONDS),
            guest_role: RoleName::public(),
        }
    }

    /// Settings from raw configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is blank or the lifetime is not positive.
    pub fn from_parts(
        secret: &str,
        audience: impl Into<String>,
        ttl_seconds: i64,
        guest_role: impl Into<String>,
    ) -> Result<Self, GuestTokenSettingsError> {
        if secret.trim().is_empty() {
            return Err(GuestTokenSettingsError::EmptySecret);
        }

        if ttl_seconds <= 0 {
            return Err(GuestTokenSettingsError::NonPositiveLifetime(ttl_seconds));
        }

        Ok(Self {
            secret: GuestTokenSecret::new(secret),
            audience: audience.into(),
            ttl: SignedDuration::from_secs(ttl_seconds),
            guest_role: RoleName::new(guest_role),
        })
    }

    #[must_use]
    pub fn codec(&self) -> GuestTokenCodec {
        GuestTokenCodec::new(&self.secret, self.audience.clone(), self.ttl)
    }
}

/// A freshly signed guest token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedGuestToken {
    pub token: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,

    /// Dashboards the token grants, resolved from its embed UUIDs.
    pub dashboards: Vec<DashboardId>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn from_parts_keeps_configured_values() -> TestResult {
        let settings = GuestTokenSettings::from_parts("s3cret", "embeds", 60, "Gamma")?;

        assert_eq!(settings.audience, "embeds");
        assert_eq!(settings.ttl, SignedDuration::from_secs(60));
        assert_eq!(settings.guest_role, RoleName::new("Gamma"));

        Ok(())
    }

    #[test]
    fn from_parts_rejects_blank_secret() {
        for secret in ["", "   "] {
            assert_eq!(
                GuestTokenSettings::from_parts(secret, "vista", 300, "Public").err(),
                Some(GuestTokenSettingsError::EmptySecret)
            );
        }
    }

    #[test]
    fn from_parts_rejects_non_positive_lifetime() {
        for ttl in [0, -60] {
            assert_eq!(
                GuestTokenSettings::from_parts("s3cret", "vista", ttl, "Public").err(),
                Some(GuestTokenSettingsError::NonPositiveLifetime(ttl))
            );
        }
    }
}

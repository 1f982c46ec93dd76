//! Guest Token Config

use clap::Args;
use vista::identity::PUBLIC_ROLE;
use vista_app::auth::{
    DEFAULT_GUEST_TOKEN_AUDIENCE, DEFAULT_GUEST_TOKEN_TTL_SECONDS, GuestTokenSettings,
    GuestTokenSettingsError,
};

/// Default request header carrying guest tokens.
pub const DEFAULT_GUEST_TOKEN_HEADER: &str = "X-GuestToken";

/// Guest token signing and transport settings.
#[derive(Debug, Args)]
pub struct GuestTokenConfig {
    /// Secret used to sign guest tokens
    #[arg(long = "guest-token-secret", env = "GUEST_TOKEN_JWT_SECRET", hide_env_values = true)]
    pub secret: String,

    /// Audience claim of guest tokens
    #[arg(
        long = "guest-token-audience",
        env = "GUEST_TOKEN_JWT_AUDIENCE",
        default_value = DEFAULT_GUEST_TOKEN_AUDIENCE
    )]
    pub audience: String,

    /// Guest token lifetime in seconds
    #[arg(
        long = "guest-token-exp-seconds",
        env = "GUEST_TOKEN_JWT_EXP_SECONDS",
        default_value_t = DEFAULT_GUEST_TOKEN_TTL_SECONDS
    )]
    pub exp_seconds: i64,

    /// Role granted to every guest
    #[arg(long = "guest-role-name", env = "GUEST_ROLE_NAME", default_value = PUBLIC_ROLE)]
    pub role_name: String,

    /// Request header carrying the guest token
    #[arg(
        long = "guest-token-header-name",
        env = "GUEST_TOKEN_HEADER_NAME",
        default_value = DEFAULT_GUEST_TOKEN_HEADER
    )]
    pub header_name: String,
}

impl GuestTokenConfig {
    /// Build the application's guest token settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is blank or the lifetime is not positive.
    pub fn settings(&self) -> Result<GuestTokenSettings, GuestTokenSettingsError> {
        GuestTokenSettings::from_parts(
            &self.secret,
            self.audience.clone(),
            self.exp_seconds,
            self.role_name.clone(),
        )
    }
}

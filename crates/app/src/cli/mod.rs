use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vista::{flags::FeatureFlags, identity::PUBLIC_ROLE};
use vista_app::auth::{
    DEFAULT_GUEST_TOKEN_AUDIENCE, DEFAULT_GUEST_TOKEN_TTL_SECONDS, GuestTokenSettings,
};

mod embedded;
mod token;

#[derive(Debug, Parser)]
#[command(name = "vista-app", about = "Vista CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Token(token::TokenCommand),
    Embedded(embedded::EmbeddedCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Token(command) => token::run(command).await,
            Commands::Embedded(command) => embedded::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Path to the YAML catalog
    #[arg(long = "catalog", env = "CATALOG_PATH")]
    pub(crate) path: PathBuf,

    /// Feature flag overrides, e.g. `EMBEDDED_DASHBOARDS=true`
    #[arg(long, env = "FEATURE_FLAGS", default_value = "")]
    pub(crate) feature_flags: String,
}

impl CatalogArgs {
    pub(crate) fn flags(&self) -> Result<FeatureFlags, String> {
        FeatureFlags::parse_overrides(&self.feature_flags)
            .map_err(|error| format!("invalid feature flags: {error}"))
    }
}

#[derive(Debug, Args)]
pub(crate) struct GuestTokenArgs {
    /// Secret used to sign guest tokens
    #[arg(long, env = "GUEST_TOKEN_JWT_SECRET", hide_env_values = true)]
    secret: String,

    /// Audience claim of guest tokens
    #[arg(long, env = "GUEST_TOKEN_JWT_AUDIENCE", default_value = DEFAULT_GUEST_TOKEN_AUDIENCE)]
    audience: String,

    /// Guest token lifetime in seconds
    #[arg(long, env = "GUEST_TOKEN_JWT_EXP_SECONDS", default_value_t = DEFAULT_GUEST_TOKEN_TTL_SECONDS)]
    ttl_seconds: i64,

    /// Role granted to every guest
    #[arg(long, env = "GUEST_ROLE_NAME", default_value = PUBLIC_ROLE)]
    guest_role: String,
}

impl GuestTokenArgs {
    pub(crate) fn settings(&self) -> Result<GuestTokenSettings, String> {
        GuestTokenSettings::from_parts(
            &self.secret,
            self.audience.clone(),
            self.ttl_seconds,
            self.guest_role.clone(),
        )
        .map_err(|error| format!("invalid guest token settings: {error}"))
    }
}

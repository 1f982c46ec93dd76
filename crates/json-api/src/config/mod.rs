//! Server configuration module

use clap::Parser;

use crate::config::{
    admin::AdminConfig, catalog::CatalogConfig, guest::GuestTokenConfig,
    observability::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod admin;
pub(crate) mod catalog;
pub(crate) mod guest;
pub(crate) mod observability;
pub(crate) mod server;

/// Vista JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "vista-json", about = "Vista JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog and feature flag settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Guest token settings.
    #[command(flatten)]
    pub guest: GuestTokenConfig,

    /// Admin API settings.
    #[command(flatten)]
    pub admin: AdminConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

//! Vista JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use vista_app::context::AppContext;

use crate::{auth::AdminToken, config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod charts;
mod config;
mod dashboards;
mod datasets;
mod embedded;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod security;
mod shutdown;
mod state;
mod tables;
#[cfg(test)]
mod test_helpers;

/// Vista JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let flags = match config.catalog.flags() {
        Ok(flags) => flags,
        Err(flag_error) => {
            error!("invalid feature flags: {flag_error}");

            process::exit(1);
        }
    };

    for (flag, enabled) in flags.iter() {
        info!(%flag, enabled, "feature flag");
    }

    let guest_settings = match config.guest.settings() {
        Ok(settings) => settings,
        Err(settings_error) => {
            error!("invalid guest token settings: {settings_error}");

            process::exit(1);
        }
    };

    let app = match AppContext::from_catalog_path(
        &config.catalog.catalog_path,
        flags,
        &guest_settings,
    ) {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let state = State::shared(
        app,
        AdminToken::new(config.admin.admin_api_token.clone()),
        config.guest.header_name.clone(),
    );

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(router::app_router());

    let doc = OpenApi::new("Vista API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .add_security_scheme(
            "guest_token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                config.guest.header_name.clone(),
            ))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}

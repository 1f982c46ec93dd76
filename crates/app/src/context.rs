//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;
use tracing::info;
use vista::{
    catalog::{Catalog, CatalogError},
    flags::FeatureFlags,
};

use crate::{
    auth::{AuthService, GuestTokenSettings, JwtAuthService},
    domain::{
        dashboards::{CatalogDashboardsService, DashboardsService},
        embedded::{CatalogEmbeddedService, EmbeddedDashboardsService},
    },
    store::CatalogStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog")]
    Catalog(#[source] CatalogError),
}

#[derive(Clone)]
pub struct AppContext {
    pub dashboards: Arc<dyn DashboardsService>,
    pub embedded: Arc<dyn EmbeddedDashboardsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read or is inconsistent.
    pub fn from_catalog_path(
        path: &Path,
        flags: FeatureFlags,
        settings: &GuestTokenSettings,
    ) -> Result<Self, AppInitError> {
        let catalog = Catalog::load(path).map_err(AppInitError::Catalog)?;

        info!(path = %path.display(), "catalog loaded");

        Ok(Self::from_catalog(catalog, flags, settings))
    }

    /// Build application context over an already loaded catalog.
    #[must_use]
    pub fn from_catalog(
        catalog: Catalog,
        flags: FeatureFlags,
        settings: &GuestTokenSettings,
    ) -> Self {
        let store = CatalogStore::new(catalog, flags);

        Self {
            dashboards: Arc::new(CatalogDashboardsService::new(store.clone())),
            embedded: Arc::new(CatalogEmbeddedService::new(store.clone())),
            auth: Arc::new(JwtAuthService::new(store, settings)),
        }
    }
}

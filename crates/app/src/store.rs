//! Shared catalog handle.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use vista::{
    catalog::Catalog,
    flags::{FeatureFlag, FeatureFlags},
};

/// Catalog and feature flags shared by every service.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Arc<RwLock<Catalog>>,
    flags: Arc<FeatureFlags>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: Catalog, flags: FeatureFlags) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            flags: Arc::new(flags),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().await
    }

    #[must_use]
    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    #[must_use]
    pub fn embedding_enabled(&self) -> bool {
        self.flags.is_enabled(FeatureFlag::EmbeddedDashboards)
    }
}

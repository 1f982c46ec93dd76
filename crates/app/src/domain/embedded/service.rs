//! Embedded dashboards service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use vista::catalog::{DashboardId, EmbeddedDashboard};

use crate::{domain::embedded::errors::EmbeddedServiceError, store::CatalogStore};

#[derive(Debug, Clone)]
pub struct CatalogEmbeddedService {
    store: CatalogStore,
}

impl CatalogEmbeddedService {
    #[must_use]
    pub const fn new(store: CatalogStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EmbeddedDashboardsService for CatalogEmbeddedService {
    async fn list_embedded(&self) -> Result<Vec<EmbeddedDashboard>, EmbeddedServiceError> {
        let catalog = self.store.read().await;

        Ok(catalog
            .embedded_dashboards()
            .into_iter()
            .cloned()
            .collect())
    }

    async fn get_embedded(
        &self,
        dashboard: DashboardId,
    ) -> Result<EmbeddedDashboard, EmbeddedServiceError> {
        let catalog = self.store.read().await;

        if catalog.dashboard(dashboard).is_none() {
            return Err(EmbeddedServiceError::DashboardNotFound);
        }

        catalog
            .embedded(dashboard)
            .cloned()
            .ok_or(EmbeddedServiceError::NotEmbedded)
    }

    async fn upsert_embedded(
        &self,
        dashboard: DashboardId,
        allowed_domains: Vec<String>,
    ) -> Result<EmbeddedDashboard, EmbeddedServiceError> {
        let mut catalog = self.store.write().await;

        let embedded = catalog.upsert_embedded(dashboard, allowed_domains)?.clone();

        info!(%dashboard, uuid = %embedded.uuid, "dashboard embedding enabled");

        Ok(embedded)
    }

    async fn delete_embedded(&self, dashboard: DashboardId) -> Result<(), EmbeddedServiceError> {
        let mut catalog = self.store.write().await;

        if catalog.dashboard(dashboard).is_none() {
            return Err(EmbeddedServiceError::DashboardNotFound);
        }

        let removed = catalog
            .remove_embedded(dashboard)
            .ok_or(EmbeddedServiceError::NotEmbedded)?;

        info!(%dashboard, uuid = %removed.uuid, "dashboard embedding disabled");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait EmbeddedDashboardsService: Send + Sync {
    /// Every embed registration, ordered by dashboard.
    async fn list_embedded(&self) -> Result<Vec<EmbeddedDashboard>, EmbeddedServiceError>;

    /// The embed registration of a dashboard.
    async fn get_embedded(
        &self,
        dashboard: DashboardId,
    ) -> Result<EmbeddedDashboard, EmbeddedServiceError>;

    /// Enable embedding or replace the allowed domains, keeping an existing UUID.
    async fn upsert_embedded(
        &self,
        dashboard: DashboardId,
        allowed_domains: Vec<String>,
    ) -> Result<EmbeddedDashboard, EmbeddedServiceError>;

    /// Disable embedding; tokens naming the old UUID stop granting anything.
    async fn delete_embedded(&self, dashboard: DashboardId) -> Result<(), EmbeddedServiceError>;
}

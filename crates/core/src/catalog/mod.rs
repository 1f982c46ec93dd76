//! Catalog
//!
//! In-memory graph of databases, datasets, charts, dashboards and embed
//! registrations. Inserts validate references, so a built catalog never
//! points at a record it does not hold.

use rustc_hash::{FxHashMap, FxHashSet};
use uuid::Uuid;

use crate::access::AccessGraph;

mod errors;
mod loader;
mod records;

pub use errors::*;
pub use records::*;

/// Resource catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    databases: FxHashMap<DatabaseId, Database>,
    datasets: FxHashMap<DatasetId, Dataset>,
    charts: FxHashMap<ChartId, Chart>,
    dashboards: FxHashMap<DashboardId, Dashboard>,

    /// Embed registrations keyed by dashboard, at most one each.
    embedded: FxHashMap<DashboardId, EmbeddedDashboard>,

    /// Embed UUID -> dashboard reverse index.
    embed_uuids: FxHashMap<Uuid, DashboardId>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a database connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already taken.
    pub fn insert_database(&mut self, database: Database) -> Result<(), CatalogError> {
        if self.databases.contains_key(&database.id) {
            return Err(CatalogError::DuplicateDatabase(database.id));
        }

        self.databases.insert(database.id, database);

        Ok(())
    }

    /// Add a dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or the database is unknown.
    pub fn insert_dataset(&mut self, dataset: Dataset) -> Result<(), CatalogError> {
        if self.datasets.contains_key(&dataset.id) {
            return Err(CatalogError::DuplicateDataset(dataset.id));
        }

        if !self.databases.contains_key(&dataset.database) {
            return Err(CatalogError::UnknownDatabase(dataset.database));
        }

        self.datasets.insert(dataset.id, dataset);

        Ok(())
    }

    /// Add a chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or the dataset is unknown.
    pub fn insert_chart(&mut self, chart: Chart) -> Result<(), CatalogError> {
        if self.charts.contains_key(&chart.id) {
            return Err(CatalogError::DuplicateChart(chart.id));
        }

        if !self.datasets.contains_key(&chart.datasource) {
            return Err(CatalogError::UnknownDataset(chart.datasource));
        }

        self.charts.insert(chart.id, chart);

        Ok(())
    }

    /// Add a dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken, or a slice or filter target
    /// references an unknown chart or dataset.
    pub fn insert_dashboard(&mut self, dashboard: Dashboard) -> Result<(), CatalogError> {
        if self.dashboards.contains_key(&dashboard.id) {
            return Err(CatalogError::DuplicateDashboard(dashboard.id));
        }

        if let Some(chart) = dashboard
            .slices
            .iter()
            .find(|chart| !self.charts.contains_key(chart))
        {
            return Err(CatalogError::UnknownChart(*chart));
        }

        if let Some(dataset) = dashboard
            .filter_datasets()
            .find(|dataset| !self.datasets.contains_key(dataset))
        {
            return Err(CatalogError::UnknownDataset(dataset));
        }

        self.dashboards.insert(dashboard.id, dashboard);

        Ok(())
    }

    /// Register an embed with a known UUID, replacing any existing
    /// registration for the same dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard is unknown or the UUID already
    /// belongs to another dashboard.
    pub fn register_embedded(
        &mut self,
        embedded: EmbeddedDashboard,
    ) -> Result<&EmbeddedDashboard, CatalogError> {
        let dashboard_id = embedded.dashboard_id;

        if !self.dashboards.contains_key(&dashboard_id) {
            return Err(CatalogError::UnknownDashboard(dashboard_id));
        }

        if let Some(owner) = self.embed_uuids.get(&embedded.uuid)
            && *owner != dashboard_id
        {
            return Err(CatalogError::DuplicateEmbedUuid {
                uuid: embedded.uuid,
                dashboard: *owner,
            });
        }

        if let Some(previous) = self.embedded.remove(&dashboard_id) {
            self.embed_uuids.remove(&previous.uuid);
        }

        self.embed_uuids.insert(embedded.uuid, dashboard_id);

        Ok(self.embedded.entry(dashboard_id).or_insert(embedded))
    }

    /// Enable embedding for a dashboard, or update its allowed domains.
    ///
    /// An existing registration keeps its UUID; a new one gets a fresh
    /// random UUID.
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard is unknown.
    pub fn upsert_embedded(
        &mut self,
        dashboard_id: DashboardId,
        allowed_domains: Vec<String>,
    ) -> Result<&EmbeddedDashboard, CatalogError> {
        if !self.dashboards.contains_key(&dashboard_id) {
            return Err(CatalogError::UnknownDashboard(dashboard_id));
        }

        let uuid = self
            .embedded
            .get(&dashboard_id)
            .map_or_else(Uuid::new_v4, |existing| existing.uuid);

        self.register_embedded(EmbeddedDashboard {
            uuid,
            dashboard_id,
            allowed_domains: allowed_domains.into_iter().collect(),
        })
    }

    /// Disable embedding for a dashboard, returning the removed registration.
    pub fn remove_embedded(&mut self, dashboard_id: DashboardId) -> Option<EmbeddedDashboard> {
        let removed = self.embedded.remove(&dashboard_id)?;

        self.embed_uuids.remove(&removed.uuid);

        Some(removed)
    }

    /// Look up a database connection.
    #[must_use]
    pub fn database(&self, id: DatabaseId) -> Option<&Database> {
        self.databases.get(&id)
    }

    /// Look up a dataset.
    #[must_use]
    pub fn dataset(&self, id: DatasetId) -> Option<&Dataset> {
        self.datasets.get(&id)
    }

    /// Look up a chart.
    #[must_use]
    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.get(&id)
    }

    /// Look up a dashboard.
    #[must_use]
    pub fn dashboard(&self, id: DashboardId) -> Option<&Dashboard> {
        self.dashboards.get(&id)
    }

    /// Embed registration for a dashboard.
    #[must_use]
    pub fn embedded(&self, dashboard_id: DashboardId) -> Option<&EmbeddedDashboard> {
        self.embedded.get(&dashboard_id)
    }

    /// Embed registration by its UUID.
    #[must_use]
    pub fn embedded_by_uuid(&self, uuid: &Uuid) -> Option<&EmbeddedDashboard> {
        self.embed_uuids
            .get(uuid)
            .and_then(|dashboard_id| self.embedded.get(dashboard_id))
    }

    /// All embed registrations, ordered by dashboard id.
    #[must_use]
    pub fn embedded_dashboards(&self) -> Vec<&EmbeddedDashboard> {
        let mut embedded: Vec<_> = self.embedded.values().collect();

        embedded.sort_by_key(|embedded| embedded.dashboard_id);

        embedded
    }

    /// Datasets a dashboard reads, through its charts or its native filters.
    #[must_use]
    pub fn dashboard_datasets(&self, dashboard: &Dashboard) -> FxHashSet<DatasetId> {
        dashboard
            .slices
            .iter()
            .filter_map(|chart| self.charts.get(chart))
            .map(|chart| chart.datasource)
            .chain(dashboard.filter_datasets())
            .collect()
    }
}

impl AccessGraph for Catalog {
    fn embedded_dashboard(&self, dashboard: DashboardId) -> Option<&EmbeddedDashboard> {
        self.embedded(dashboard)
    }

    fn dashboards_with_chart(&self, chart: ChartId) -> Vec<DashboardId> {
        self.dashboards
            .values()
            .filter(|dashboard| dashboard.slices.contains(&chart))
            .map(|dashboard| dashboard.id)
            .collect()
    }

    fn dashboards_using_dataset(&self, dataset: DatasetId) -> Vec<DashboardId> {
        self.dashboards
            .values()
            .filter(|dashboard| self.dashboard_datasets(dashboard).contains(&dataset))
            .map(|dashboard| dashboard.id)
            .collect()
    }
}

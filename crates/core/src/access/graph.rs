//! Resource graph consumed by the guest authorizer.

use crate::catalog::{ChartId, DashboardId, DatasetId, EmbeddedDashboard};

/// Read-only queries the authorizer needs from the catalog.
pub trait AccessGraph {
    /// Embed registration for a dashboard, if embedding is enabled for it.
    fn embedded_dashboard(&self, dashboard: DashboardId) -> Option<&EmbeddedDashboard>;

    /// Dashboards whose slices include the chart.
    fn dashboards_with_chart(&self, chart: ChartId) -> Vec<DashboardId>;

    /// Dashboards reading the dataset through a chart or a native filter.
    fn dashboards_using_dataset(&self, dataset: DatasetId) -> Vec<DashboardId>;
}

//! Catalog errors

use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{ChartId, DashboardId, DatabaseId, DatasetId};

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Database id used twice
    #[error("duplicate database {0}")]
    DuplicateDatabase(DatabaseId),

    /// Dataset id used twice
    #[error("duplicate dataset {0}")]
    DuplicateDataset(DatasetId),

    /// Chart id used twice
    #[error("duplicate chart {0}")]
    DuplicateChart(ChartId),

    /// Dashboard id used twice
    #[error("duplicate dashboard {0}")]
    DuplicateDashboard(DashboardId),

    /// Embed UUID already assigned to another dashboard
    #[error("embed uuid {uuid} is already assigned to dashboard {dashboard}")]
    DuplicateEmbedUuid {
        /// Conflicting embed UUID
        uuid: Uuid,

        /// Dashboard already holding it
        dashboard: DashboardId,
    },

    /// Reference to a missing database
    #[error("database {0} not found")]
    UnknownDatabase(DatabaseId),

    /// Reference to a missing dataset
    #[error("dataset {0} not found")]
    UnknownDataset(DatasetId),

    /// Reference to a missing chart
    #[error("chart {0} not found")]
    UnknownChart(ChartId),

    /// Reference to a missing dashboard
    #[error("dashboard {0} not found")]
    UnknownDashboard(DashboardId),
}

//! Access denial errors.

use thiserror::Error;

use crate::catalog::{ChartId, DashboardId, DatabaseId, DatasetId, Table};

/// A guest asked for a dashboard its token does not grant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("access to dashboard {dashboard} denied")]
pub struct DashboardAccessDeniedError {
    /// Dashboard that was requested.
    pub dashboard: DashboardId,
}

/// A request for a non-dashboard resource was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecurityError {
    /// The identity is not an active guest.
    #[error("identity is not a guest user")]
    NotGuest,

    /// Chart belongs to no dashboard the guest may view.
    #[error("guest user cannot view chart {0}")]
    Chart(ChartId),

    /// Dataset is used by no dashboard the guest may view.
    #[error("guest user cannot read datasource {0}")]
    Datasource(DatasetId),

    /// Direct table access, never available to guests.
    #[error("guest user cannot query table {table} on database {database}")]
    Table {
        /// Requested table.
        table: Table,

        /// Connection the table was requested on.
        database: DatabaseId,
    },
}

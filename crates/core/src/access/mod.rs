//! Guest Access
//!
//! Decides whether a guest token holder may view a dashboard, a chart or a
//! dataset. Guests reach data only through dashboards whose embed UUID their
//! token names; publication state, ownership and shared datasources never
//! widen that set, and raw table access is never granted.

use tracing::debug;

use crate::{
    catalog::{Chart, Dashboard, DashboardId, DatabaseId, Dataset, Table},
    flags::{FeatureFlag, FeatureFlags},
    identity::{GuestUser, Identity},
};

mod errors;
mod graph;

pub use errors::*;
pub use graph::*;

/// Non-dashboard resource a request wants to read.
#[derive(Debug, Clone, Copy)]
pub enum AccessRequest<'a> {
    /// A chart and, through it, its data.
    Chart(&'a Chart),

    /// A dataset.
    Datasource(&'a Dataset),

    /// A physical table on a connection, bypassing datasets.
    Table {
        /// Requested table.
        table: &'a Table,

        /// Connection the table lives on.
        database: DatabaseId,
    },
}

/// Guest authorizer over a feature flag snapshot and a resource graph.
#[derive(Debug)]
pub struct GuestAccess<'a, G: ?Sized> {
    flags: &'a FeatureFlags,
    graph: &'a G,
}

impl<'a, G> GuestAccess<'a, G>
where
    G: AccessGraph + ?Sized,
{
    /// Create an authorizer.
    pub const fn new(flags: &'a FeatureFlags, graph: &'a G) -> Self {
        Self { flags, graph }
    }

    /// Whether the identity is a guest and embedding is enabled.
    #[must_use]
    pub fn is_guest_user(&self, identity: &Identity) -> bool {
        identity.is_guest_flagged() && self.flags.is_enabled(FeatureFlag::EmbeddedDashboards)
    }

    /// The guest credential behind the identity, when it is an active guest.
    #[must_use]
    pub fn current_guest<'i>(&self, identity: &'i Identity) -> Option<&'i GuestUser> {
        if !self.flags.is_enabled(FeatureFlag::EmbeddedDashboards) {
            return None;
        }

        match identity {
            Identity::Guest(guest) => Some(guest),
            Identity::User(_) | Identity::Anonymous => None,
        }
    }

    /// Whether the identity's guest token grants the dashboard.
    #[must_use]
    pub fn has_dashboard_access(&self, identity: &Identity, dashboard: &Dashboard) -> bool {
        self.current_guest(identity)
            .is_some_and(|guest| self.guest_can_view(guest, dashboard.id))
    }

    /// Require guest access to a dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardAccessDeniedError`] unless the guest token names
    /// the dashboard's embed UUID.
    pub fn raise_for_dashboard_access(
        &self,
        identity: &Identity,
        dashboard: &Dashboard,
    ) -> Result<(), DashboardAccessDeniedError> {
        if self.has_dashboard_access(identity, dashboard) {
            return Ok(());
        }

        debug!(dashboard = %dashboard.id, "guest dashboard access denied");

        Err(DashboardAccessDeniedError {
            dashboard: dashboard.id,
        })
    }

    /// Require guest access to a chart, dataset or table.
    ///
    /// # Errors
    ///
    /// Returns a [`SecurityError`] naming the refused resource.
    pub fn raise_for_access(
        &self,
        identity: &Identity,
        request: AccessRequest<'_>,
    ) -> Result<(), SecurityError> {
        let Some(guest) = self.current_guest(identity) else {
            return Err(SecurityError::NotGuest);
        };

        let result = match request {
            AccessRequest::Chart(chart) => self
                .any_viewable(guest, self.graph.dashboards_with_chart(chart.id))
                .then_some(())
                .ok_or(SecurityError::Chart(chart.id)),
            AccessRequest::Datasource(dataset) => self
                .any_viewable(guest, self.graph.dashboards_using_dataset(dataset.id))
                .then_some(())
                .ok_or(SecurityError::Datasource(dataset.id)),
            AccessRequest::Table { table, database } => Err(SecurityError::Table {
                table: table.clone(),
                database,
            }),
        };

        if let Err(error) = &result {
            debug!(%error, "guest resource access denied");
        }

        result
    }

    fn any_viewable(&self, guest: &GuestUser, dashboards: Vec<DashboardId>) -> bool {
        dashboards
            .into_iter()
            .any(|dashboard| self.guest_can_view(guest, dashboard))
    }

    fn guest_can_view(&self, guest: &GuestUser, dashboard: DashboardId) -> bool {
        self.graph
            .embedded_dashboard(dashboard)
            .is_some_and(|embedded| guest.grants_dashboard(&embedded.uuid))
    }
}

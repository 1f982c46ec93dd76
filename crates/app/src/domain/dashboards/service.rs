//! Dashboards service.

use async_trait::async_trait;
use mockall::automock;
use vista::{
    access::{AccessRequest, GuestAccess},
    catalog::{Chart, ChartId, Dashboard, DashboardId, DatabaseId, Dataset, DatasetId, Table},
    identity::Identity,
};

use crate::{domain::dashboards::errors::DashboardsServiceError, store::CatalogStore};

#[derive(Debug, Clone)]
pub struct CatalogDashboardsService {
    store: CatalogStore,
}

impl CatalogDashboardsService {
    #[must_use]
    pub const fn new(store: CatalogStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DashboardsService for CatalogDashboardsService {
    async fn get_dashboard(
        &self,
        identity: &Identity,
        dashboard: DashboardId,
    ) -> Result<Dashboard, DashboardsServiceError> {
        let catalog = self.store.read().await;

        let dashboard = catalog
            .dashboard(dashboard)
            .ok_or(DashboardsServiceError::NotFound)?;

        GuestAccess::new(self.store.flags(), &*catalog)
            .raise_for_dashboard_access(identity, dashboard)?;

        Ok(dashboard.clone())
    }

    async fn get_chart(
        &self,
        identity: &Identity,
        chart: ChartId,
    ) -> Result<Chart, DashboardsServiceError> {
        let catalog = self.store.read().await;

        let chart = catalog.chart(chart).ok_or(DashboardsServiceError::NotFound)?;

        GuestAccess::new(self.store.flags(), &*catalog)
            .raise_for_access(identity, AccessRequest::Chart(chart))?;

        Ok(chart.clone())
    }

    async fn get_dataset(
        &self,
        identity: &Identity,
        dataset: DatasetId,
    ) -> Result<Dataset, DashboardsServiceError> {
        let catalog = self.store.read().await;

        let dataset = catalog
            .dataset(dataset)
            .ok_or(DashboardsServiceError::NotFound)?;

        GuestAccess::new(self.store.flags(), &*catalog)
            .raise_for_access(identity, AccessRequest::Datasource(dataset))?;

        Ok(dataset.clone())
    }

    async fn authorize_table(
        &self,
        identity: &Identity,
        database: DatabaseId,
        table: Table,
    ) -> Result<(), DashboardsServiceError> {
        let catalog = self.store.read().await;

        if catalog.database(database).is_none() {
            return Err(DashboardsServiceError::NotFound);
        }

        GuestAccess::new(self.store.flags(), &*catalog).raise_for_access(
            identity,
            AccessRequest::Table {
                table: &table,
                database,
            },
        )?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait DashboardsService: Send + Sync {
    /// Retrieve a dashboard the guest token grants.
    async fn get_dashboard(
        &self,
        identity: &Identity,
        dashboard: DashboardId,
    ) -> Result<Dashboard, DashboardsServiceError>;

    /// Retrieve a chart shown on a dashboard the guest may view.
    async fn get_chart(
        &self,
        identity: &Identity,
        chart: ChartId,
    ) -> Result<Chart, DashboardsServiceError>;

    /// Retrieve a dataset used by a dashboard the guest may view.
    async fn get_dataset(
        &self,
        identity: &Identity,
        dataset: DatasetId,
    ) -> Result<Dataset, DashboardsServiceError>;

    /// Check direct table access on a database connection.
    async fn authorize_table(
        &self,
        identity: &Identity,
        database: DatabaseId,
        table: Table,
    ) -> Result<(), DashboardsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use vista::{
        access::SecurityError,
        catalog::Table,
        fixtures::{
            BIRTH_NAMES_DATASET, BIRTHS_DASHBOARD, EXAMPLES_DATABASE, FILTER_ONLY_DATASET,
            GENDERS_CHART, LIFE_EXPECTANCY_CHART, REGIONAL_DASHBOARD, WB_HEALTH_DATASET,
            WORLD_BANK_DASHBOARD, admin, authorized_guest, unauthorized_guest,
        },
    };

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn get_dashboard_returns_granted_dashboard() -> TestResult {
        let ctx = TestContext::new();

        let dashboard = ctx
            .dashboards
            .get_dashboard(&authorized_guest(), BIRTHS_DASHBOARD)
            .await?;

        assert_eq!(dashboard.id, BIRTHS_DASHBOARD);
        assert_eq!(dashboard.slug.as_deref(), Some("births"));

        Ok(())
    }

    #[tokio::test]
    async fn get_dashboard_denies_other_dashboards() {
        let ctx = TestContext::new();

        for dashboard in [WORLD_BANK_DASHBOARD, REGIONAL_DASHBOARD] {
            let result = ctx
                .dashboards
                .get_dashboard(&authorized_guest(), dashboard)
                .await;

            assert!(
                matches!(result, Err(DashboardsServiceError::DashboardAccessDenied(ref error)) if error.dashboard == dashboard),
                "expected DashboardAccessDenied, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn get_dashboard_unknown_id_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx
            .dashboards
            .get_dashboard(&authorized_guest(), DashboardId::new(404))
            .await;

        assert!(matches!(result, Err(DashboardsServiceError::NotFound)));
    }

    #[tokio::test]
    async fn get_chart_follows_dashboard_grant() -> TestResult {
        let ctx = TestContext::new();

        let chart = ctx
            .dashboards
            .get_chart(&authorized_guest(), GENDERS_CHART)
            .await?;

        assert_eq!(chart.id, GENDERS_CHART);

        let result = ctx
            .dashboards
            .get_chart(&authorized_guest(), LIFE_EXPECTANCY_CHART)
            .await;

        assert!(matches!(
            result,
            Err(DashboardsServiceError::Forbidden(SecurityError::Chart(id))) if id == LIFE_EXPECTANCY_CHART
        ));

        Ok(())
    }

    #[tokio::test]
    async fn get_dataset_follows_dashboard_grant() -> TestResult {
        let ctx = TestContext::new();

        let dataset = ctx
            .dashboards
            .get_dataset(&authorized_guest(), BIRTH_NAMES_DATASET)
            .await?;

        assert_eq!(dataset.id, BIRTH_NAMES_DATASET);

        for denied in [WB_HEALTH_DATASET, FILTER_ONLY_DATASET] {
            let result = ctx
                .dashboards
                .get_dataset(&authorized_guest(), denied)
                .await;

            assert!(matches!(
                result,
                Err(DashboardsServiceError::Forbidden(SecurityError::Datasource(id))) if id == denied
            ));
        }

        Ok(())
    }

    #[tokio::test]
    async fn unauthorized_guest_sees_nothing() {
        let ctx = TestContext::new();
        let guest = unauthorized_guest();

        assert!(
            ctx.dashboards
                .get_dashboard(&guest, BIRTHS_DASHBOARD)
                .await
                .is_err()
        );
        assert!(ctx.dashboards.get_chart(&guest, GENDERS_CHART).await.is_err());
        assert!(
            ctx.dashboards
                .get_dataset(&guest, BIRTH_NAMES_DATASET)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn authorize_table_always_refuses_guests() {
        let ctx = TestContext::new();

        let result = ctx
            .dashboards
            .authorize_table(
                &authorized_guest(),
                EXAMPLES_DATABASE,
                Table::new("birth_names"),
            )
            .await;

        assert!(matches!(
            result,
            Err(DashboardsServiceError::Forbidden(SecurityError::Table { .. }))
        ));
    }

    #[tokio::test]
    async fn authorize_table_unknown_database_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx
            .dashboards
            .authorize_table(&authorized_guest(), DatabaseId::new(9), Table::new("t"))
            .await;

        assert!(matches!(result, Err(DashboardsServiceError::NotFound)));
    }

    #[tokio::test]
    async fn regular_users_are_not_guests() {
        let ctx = TestContext::new();

        let result = ctx.dashboards.get_chart(&admin(), GENDERS_CHART).await;

        assert!(matches!(
            result,
            Err(DashboardsServiceError::Forbidden(SecurityError::NotGuest))
        ));
    }
}

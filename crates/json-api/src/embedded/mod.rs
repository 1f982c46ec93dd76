//! Embedded Dashboard Registrations

pub(crate) mod delete;
pub(crate) mod errors;
pub(crate) mod get;
pub(crate) mod put;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vista::catalog::EmbeddedDashboard;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmbeddedDashboardResponse {
    /// Embed UUID to place in guest token grants
    pub uuid: Uuid,

    pub dashboard_id: i64,

    /// Origins allowed to frame the dashboard; empty allows any
    pub allowed_domains: Vec<String>,
}

impl From<EmbeddedDashboard> for EmbeddedDashboardResponse {
    fn from(embedded: EmbeddedDashboard) -> Self {
        EmbeddedDashboardResponse {
            uuid: embedded.uuid,
            dashboard_id: embedded.dashboard_id.get(),
            allowed_domains: embedded.allowed_domains.into_vec(),
        }
    }
}

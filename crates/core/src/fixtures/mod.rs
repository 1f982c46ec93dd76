//! Fixtures
//!
//! The example catalog shipped in `fixtures/catalogs/births.yml`, with
//! named handles for its records and ready-made identities.

use uuid::Uuid;

use crate::{
    catalog::{Catalog, CatalogError, ChartId, DashboardId, DatabaseId, DatasetId},
    grants::{GuestToken, GuestTokenResource, GuestTokenUser},
    identity::{GuestUser, Identity, RoleName, User, UserId},
};

const BIRTHS_YAML: &str = include_str!("../../fixtures/catalogs/births.yml");

/// `examples` connection.
pub const EXAMPLES_DATABASE: DatabaseId = DatabaseId::new(1);

/// `birth_names` dataset, used by the births and world bank dashboards.
pub const BIRTH_NAMES_DATASET: DatasetId = DatasetId::new(1);

/// `wb_health_population` dataset, world bank dashboard only.
pub const WB_HEALTH_DATASET: DatasetId = DatasetId::new(2);

/// Dataset referenced only by the regional dashboard's native filter.
pub const FILTER_ONLY_DATASET: DatasetId = DatasetId::new(3);

/// First slice of the births dashboard.
pub const GENDERS_CHART: ChartId = ChartId::new(1);

/// World bank chart on `wb_health_population`.
pub const LIFE_EXPECTANCY_CHART: ChartId = ChartId::new(4);

/// World bank chart on `birth_names`, not part of the births dashboard.
pub const TOP_NAMES_CHART: ChartId = ChartId::new(5);

/// Embedded births dashboard.
pub const BIRTHS_DASHBOARD: DashboardId = DashboardId::new(1);

/// Published, not embedded.
pub const WORLD_BANK_DASHBOARD: DashboardId = DashboardId::new(2);

/// Embedded, no slices, one native filter.
pub const REGIONAL_DASHBOARD: DashboardId = DashboardId::new(3);

/// Unpublished, not embedded, no slices.
pub const DRAFT_DASHBOARD: DashboardId = DashboardId::new(4);

/// Embed UUID of the births dashboard.
pub const BIRTHS_EMBED_UUID: Uuid = Uuid::from_u128(0x8e5b_5a3b_9f11_4d6c_a3c1_1f0b_0c2d_7e01);

/// Embed UUID of the regional dashboard.
pub const REGIONAL_EMBED_UUID: Uuid = Uuid::from_u128(0x3c2f_7a50_5d6b_4a8e_9b7c_2e4f_6a8b_0c12);

/// Embed UUID registered nowhere.
pub const UNREGISTERED_EMBED_UUID: &str = "06383667-3e02-4e5e-843f-44e9c5896b6c";

/// Load the example catalog.
///
/// # Errors
///
/// Returns an error if the bundled YAML does not load.
pub fn births() -> Result<Catalog, CatalogError> {
    Catalog::from_yaml_str(BIRTHS_YAML)
}

/// Guest identity holding the given grants and the public role.
#[must_use]
pub fn guest_with(resources: Vec<GuestTokenResource>) -> Identity {
    Identity::Guest(GuestUser::from_token(
        GuestToken {
            user: GuestTokenUser::default(),
            resources,
        },
        vec![RoleName::public()],
    ))
}

/// Guest granted the births dashboard.
#[must_use]
pub fn authorized_guest() -> Identity {
    guest_with(vec![GuestTokenResource::dashboard(
        BIRTHS_EMBED_UUID.to_string(),
    )])
}

/// Guest granted a dashboard that is not registered.
#[must_use]
pub fn unauthorized_guest() -> Identity {
    guest_with(vec![GuestTokenResource::dashboard(UNREGISTERED_EMBED_UUID)])
}

/// Regular admin user.
#[must_use]
pub fn admin() -> Identity {
    Identity::User(User {
        id: UserId::new(1),
        username: "admin".to_string(),
        roles: vec![RoleName::new("Admin")],
    })
}

//! Catalog Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::{identity::UserId, ids::TypedId};

/// Dashboard id.
pub type DashboardId = TypedId<Dashboard>;

/// Chart id.
pub type ChartId = TypedId<Chart>;

/// Dataset id.
pub type DatasetId = TypedId<Dataset>;

/// Database connection id.
pub type DatabaseId = TypedId<Database>;

/// Database connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Connection id.
    pub id: DatabaseId,

    /// Display name.
    pub name: String,
}

/// Physical table reference, optionally schema-qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    /// Schema, if any.
    #[serde(default)]
    pub schema: Option<String>,

    /// Table name.
    pub table: String,
}

impl Table {
    /// Unqualified table reference.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: table.into(),
        }
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.schema {
            Some(schema) => write!(f, "{schema}.{}", self.table),
            None => f.write_str(&self.table),
        }
    }
}

/// Dataset built on a table of a database connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset id.
    pub id: DatasetId,

    /// Connection the table lives on.
    pub database: DatabaseId,

    /// Table schema.
    #[serde(default)]
    pub schema: Option<String>,

    /// Table name.
    pub table_name: String,
}

impl Dataset {
    /// Underlying physical table.
    #[must_use]
    pub fn table(&self) -> Table {
        Table {
            schema: self.schema.clone(),
            table: self.table_name.clone(),
        }
    }
}

/// Chart (slice) reading from one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Chart id.
    pub id: ChartId,

    /// Display name.
    pub name: String,

    /// Dataset the chart queries.
    pub datasource: DatasetId,
}

/// Native filter target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTarget {
    /// Dataset the filter reads its values from.
    #[serde(rename = "datasetId", default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<DatasetId>,

    /// Column the filter applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

/// Dashboard-level filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeFilter {
    /// Filter id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Filter targets.
    #[serde(default)]
    pub targets: Vec<FilterTarget>,
}

/// Dashboard JSON metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetadata {
    /// Native filters.
    #[serde(default)]
    pub native_filter_configuration: Vec<NativeFilter>,
}

/// Dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Dashboard id.
    pub id: DashboardId,

    /// Title.
    pub title: String,

    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,

    /// Publication state. Irrelevant to guest access.
    #[serde(default)]
    pub published: bool,

    /// Owners. Irrelevant to guest access.
    #[serde(default)]
    pub owners: Vec<UserId>,

    /// Charts in layout order.
    #[serde(default)]
    pub slices: Vec<ChartId>,

    /// JSON metadata.
    #[serde(default)]
    pub json_metadata: DashboardMetadata,
}

impl Dashboard {
    /// Datasets referenced by native filter targets.
    pub fn filter_datasets(&self) -> impl Iterator<Item = DatasetId> + '_ {
        self.json_metadata
            .native_filter_configuration
            .iter()
            .flat_map(|filter| filter.targets.iter())
            .filter_map(|target| target.dataset_id)
    }
}

/// Embed registration making a dashboard available to guests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedDashboard {
    /// Stable embed identifier handed out to host applications.
    pub uuid: Uuid,

    /// Embedded dashboard.
    pub dashboard_id: DashboardId,

    /// Origins allowed to frame the dashboard; empty allows any.
    #[serde(default)]
    pub allowed_domains: SmallVec<[String; 2]>,
}

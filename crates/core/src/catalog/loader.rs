//! Catalog YAML loading

use std::{fs, path::Path};

use serde::Deserialize;

use crate::catalog::{
    Catalog, CatalogError, Chart, Dashboard, Database, Dataset, EmbeddedDashboard,
};

/// On-disk catalog layout.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    databases: Vec<Database>,

    #[serde(default)]
    datasets: Vec<Dataset>,

    #[serde(default)]
    charts: Vec<Chart>,

    #[serde(default)]
    dashboards: Vec<Dashboard>,

    #[serde(default)]
    embedded: Vec<EmbeddedDashboard>,
}

impl Catalog {
    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or references missing records.
    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(contents)?;
        let mut catalog = Self::new();

        for database in file.databases {
            catalog.insert_database(database)?;
        }

        for dataset in file.datasets {
            catalog.insert_dataset(dataset)?;
        }

        for chart in file.charts {
            catalog.insert_chart(chart)?;
        }

        for dashboard in file.dashboards {
            catalog.insert_dashboard(dashboard)?;
        }

        for embedded in file.embedded {
            catalog.register_embedded(embedded)?;
        }

        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }
}

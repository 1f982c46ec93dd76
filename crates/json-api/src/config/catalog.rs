//! Catalog Config

use std::path::PathBuf;

use clap::Args;
use vista::flags::{FeatureFlags, FlagError};

/// Catalog source and feature flags.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Path to the YAML catalog
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog_path: PathBuf,

    /// Comma-separated `NAME=bool` feature flag overrides
    #[arg(long, env = "FEATURE_FLAGS", default_value = "")]
    pub feature_flags: String,
}

impl CatalogConfig {
    /// Parse the feature flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override value is not a boolean.
    pub fn flags(&self) -> Result<FeatureFlags, FlagError> {
        FeatureFlags::parse_overrides(&self.feature_flags)
    }
}

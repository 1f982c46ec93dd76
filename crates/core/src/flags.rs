//! Feature Flags
//!
//! A fixed table of known flags with their default state, plus per-deployment
//! overrides. Flags are plain values handed to whoever needs them; there is
//! no process-global flag store.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::warn;

/// Known feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    /// Alerts and reports.
    AlertReports,

    /// Attach screenshots to alert notifications.
    AlertsAttachReports,

    /// Cross-filtering between dashboard charts.
    DashboardCrossFilters,

    /// Role-based access control on dashboards.
    DashboardRbac,

    /// Drill to detail on charts.
    DrillToDetail,

    /// Sharing individual charts with embedding.
    EmbeddableCharts,

    /// Embedded dashboards and guest tokens.
    EmbeddedDashboards,

    /// Horizontal native filter bar.
    HorizontalFilterBar,

    /// Thumbnail computation endpoint.
    Thumbnails,
}

impl FeatureFlag {
    /// Every known flag.
    pub const ALL: [Self; 9] = [
        Self::AlertReports,
        Self::AlertsAttachReports,
        Self::DashboardCrossFilters,
        Self::DashboardRbac,
        Self::DrillToDetail,
        Self::EmbeddableCharts,
        Self::EmbeddedDashboards,
        Self::HorizontalFilterBar,
        Self::Thumbnails,
    ];

    /// Configuration key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AlertReports => "ALERT_REPORTS",
            Self::AlertsAttachReports => "ALERTS_ATTACH_REPORTS",
            Self::DashboardCrossFilters => "DASHBOARD_CROSS_FILTERS",
            Self::DashboardRbac => "DASHBOARD_RBAC",
            Self::DrillToDetail => "DRILL_TO_DETAIL",
            Self::EmbeddableCharts => "EMBEDDABLE_CHARTS",
            Self::EmbeddedDashboards => "EMBEDDED_DASHBOARDS",
            Self::HorizontalFilterBar => "HORIZONTAL_FILTER_BAR",
            Self::Thumbnails => "THUMBNAILS",
        }
    }

    /// Older configuration keys that still select this flag.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::EmbeddedDashboards => &["EMBEDDED_SUPERSET"],
            _ => &[],
        }
    }

    /// Whether `name` is this flag's key or one of its aliases.
    fn is_named(self, name: &str) -> bool {
        self.key().eq_ignore_ascii_case(name)
            || self
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// State when no override is configured.
    #[must_use]
    pub const fn default_enabled(self) -> bool {
        match self {
            Self::AlertsAttachReports
            | Self::DashboardCrossFilters
            | Self::DrillToDetail
            | Self::EmbeddableCharts
            | Self::HorizontalFilterBar => true,
            Self::AlertReports | Self::DashboardRbac | Self::EmbeddedDashboards | Self::Thumbnails => {
                false
            }
        }
    }
}

impl Display for FeatureFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key())
    }
}

impl FromStr for FeatureFlag {
    type Err = FlagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.is_named(value))
            .ok_or_else(|| FlagError::UnknownFlag(value.to_string()))
    }
}

/// Flag parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlagError {
    /// Flag name is not in the known table.
    #[error("unknown feature flag: {0}")]
    UnknownFlag(String),

    /// Override entry is not `NAME=bool`.
    #[error("invalid feature flag override: {0}")]
    InvalidOverride(String),
}

/// Resolved feature flag state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    overrides: FxHashMap<FeatureFlag, bool>,
}

impl FeatureFlags {
    /// Default table with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style override.
    #[must_use]
    pub fn with(mut self, flag: FeatureFlag, enabled: bool) -> Self {
        self.set(flag, enabled);
        self
    }

    /// Override a single flag.
    pub fn set(&mut self, flag: FeatureFlag, enabled: bool) {
        self.overrides.insert(flag, enabled);
    }

    /// Whether `flag` is on.
    #[must_use]
    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.overrides
            .get(&flag)
            .copied()
            .unwrap_or_else(|| flag.default_enabled())
    }

    /// Every known flag with its resolved state.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureFlag, bool)> + '_ {
        FeatureFlag::ALL
            .into_iter()
            .map(|flag| (flag, self.is_enabled(flag)))
    }

    /// Parse comma-separated `NAME=bool` overrides, e.g.
    /// `EMBEDDED_DASHBOARDS=true,ALERT_REPORTS=true`.
    ///
    /// Unknown flag names are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error when an entry is not `NAME=bool`.
    pub fn parse_overrides(raw: &str) -> Result<Self, FlagError> {
        let mut flags = Self::new();

        for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| FlagError::InvalidOverride(entry.to_string()))?;

            let enabled = value
                .trim()
                .to_ascii_lowercase()
                .parse::<bool>()
                .map_err(|_parse_error| FlagError::InvalidOverride(entry.to_string()))?;

            match name.trim().parse::<FeatureFlag>() {
                Ok(flag) => flags.set(flag, enabled),
                Err(error) => warn!("ignoring feature flag override: {error}"),
            }
        }

        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn embedding_is_off_by_default() {
        let flags = FeatureFlags::new();

        assert!(!flags.is_enabled(FeatureFlag::EmbeddedDashboards));
        assert!(flags.is_enabled(FeatureFlag::EmbeddableCharts));
    }

    #[test]
    fn overrides_replace_defaults() -> TestResult {
        let flags = FeatureFlags::parse_overrides("EMBEDDED_DASHBOARDS=true, ALERT_REPORTS=TRUE")?;

        assert!(flags.is_enabled(FeatureFlag::EmbeddedDashboards));
        assert!(flags.is_enabled(FeatureFlag::AlertReports));
        assert!(flags.is_enabled(FeatureFlag::DrillToDetail));

        Ok(())
    }

    #[test]
    fn unknown_flags_are_skipped() -> TestResult {
        let flags = FeatureFlags::parse_overrides("KV_STORE=true,THUMBNAILS=true")?;

        assert!(flags.is_enabled(FeatureFlag::Thumbnails));

        Ok(())
    }

    #[test]
    fn legacy_embedding_key_enables_embedded_dashboards() -> TestResult {
        let flags = FeatureFlags::parse_overrides("EMBEDDED_SUPERSET=true")?;

        assert!(flags.is_enabled(FeatureFlag::EmbeddedDashboards));
        assert_eq!(
            "embedded_superset".parse::<FeatureFlag>(),
            Ok(FeatureFlag::EmbeddedDashboards)
        );

        Ok(())
    }

    #[test]
    fn malformed_override_is_rejected() {
        assert_eq!(
            FeatureFlags::parse_overrides("THUMBNAILS"),
            Err(FlagError::InvalidOverride("THUMBNAILS".to_string()))
        );
        assert!(FeatureFlags::parse_overrides("THUMBNAILS=maybe").is_err());
    }

    #[test]
    fn iter_lists_every_flag() {
        assert_eq!(FeatureFlags::new().iter().count(), FeatureFlag::ALL.len());
    }
}

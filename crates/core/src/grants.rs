//! Guest token resource grants.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Kind of resource named by a guest token grant.
///
/// Only `dashboard` grants carry meaning. Any other type string is kept
/// verbatim so a token naming an unknown type still parses, it just never
/// matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GuestTokenResourceType {
    /// An embedded dashboard, identified by its embed UUID.
    Dashboard,

    /// Any other type string.
    Other(String),
}

impl GuestTokenResourceType {
    /// Wire name of the type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for GuestTokenResourceType {
    fn from(value: String) -> Self {
        if value == "dashboard" {
            Self::Dashboard
        } else {
            Self::Other(value)
        }
    }
}

impl From<GuestTokenResourceType> for String {
    fn from(value: GuestTokenResourceType) -> Self {
        match value {
            GuestTokenResourceType::Dashboard => "dashboard".to_string(),
            GuestTokenResourceType::Other(other) => other,
        }
    }
}

impl Display for GuestTokenResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A single `{type, id}` grant inside a guest token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestTokenResource {
    /// Resource type.
    #[serde(rename = "type")]
    pub kind: GuestTokenResourceType,

    /// Resource identifier; for dashboards, the embed UUID as a string.
    pub id: String,
}

impl GuestTokenResource {
    /// Grant naming an embedded dashboard.
    pub fn dashboard(id: impl Into<String>) -> Self {
        Self {
            kind: GuestTokenResourceType::Dashboard,
            id: id.into(),
        }
    }

    /// Grant of an arbitrary type.
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: GuestTokenResourceType::from(kind.into()),
            id: id.into(),
        }
    }
}

/// The `user` object of a guest token payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestTokenUser {
    /// Display username.
    #[serde(default)]
    pub username: String,

    /// Given name.
    #[serde(default)]
    pub first_name: String,

    /// Family name.
    #[serde(default)]
    pub last_name: String,
}

/// Verified guest token payload: `{"user": {...}, "resources": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestToken {
    /// Who the guest claims to be.
    #[serde(default)]
    pub user: GuestTokenUser,

    /// Resources the guest may access.
    pub resources: Vec<GuestTokenResource>,
}

//! Vista
//!
//! Guest access control for embedded dashboards: the resource catalog, feature
//! flags, guest token grants and the authorizer deciding what a guest token
//! holder may read.

pub mod access;
pub mod catalog;
pub mod fixtures;
pub mod flags;
pub mod grants;
pub mod identity;
pub mod ids;

//! Shared application services for guest-embedded dashboards.

pub mod auth;
pub mod context;
pub mod domain;
pub mod store;

#[cfg(test)]
mod test;

//! Vista Domain Concerns

pub mod dashboards;
pub mod embedded;

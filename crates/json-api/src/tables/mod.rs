//! Tables

pub(crate) mod get;

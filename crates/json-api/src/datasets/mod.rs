//! Datasets

pub(crate) mod get;

//! Charts

pub(crate) mod get;

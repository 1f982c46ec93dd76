//! Security

pub(crate) mod errors;
pub(crate) mod guest_token;

//! Request authentication: guest tokens for embedded reads, a static bearer
//! token for admin endpoints.

pub(crate) mod admin;
pub(crate) mod guest;
mod token;

pub(crate) use token::AdminToken;

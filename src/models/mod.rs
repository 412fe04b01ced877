//! Data models shared by the store and the HTTP layer.

/// Account request and response bodies
pub mod account;
/// Minor-unit money type
pub mod money;

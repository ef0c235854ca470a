//! Data models representing database entities and wire payloads.

/// Account model and request bodies
pub mod account;

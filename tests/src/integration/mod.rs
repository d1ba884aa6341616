//! Cross-crate integration tests.

pub mod key_provisioning;
pub mod signed_links;
pub mod wire_compat;

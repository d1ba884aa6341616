//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports.

pub mod clock;
pub mod key_store;

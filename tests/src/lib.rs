//! # Signed Link Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── signed_links.rs      # Issue → transport → validate flows
//!     ├── key_provisioning.rs  # File key store feeding the signer
//!     └── wire_compat.rs       # Fixed vectors for the URL and cipher formats
//! tests/benches/
//! └── signer_benchmarks.rs     # criterion
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p us-tests
//! cargo test -p us-tests integration::wire_compat
//! cargo bench -p us-tests
//! ```

pub mod integration;

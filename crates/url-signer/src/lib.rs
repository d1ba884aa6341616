//! # URL Signer
//!
//! Issues and checks time-limited, tamper-evident download links.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): parameter bag, canonical encoding, HMAC
//!   signatures, configuration. No I/O.
//! - **Ports Layer** (`ports/`): the `SignedUrlApi` inbound trait and the
//!   `KeyProvider` / `Clock` outbound traits
//! - **Adapters Layer** (`adapters/`): JSON key file store, system clock
//! - **Service Layer** (`service.rs`): the `UrlSigner` facade wiring it together
//!
//! ## Wire Format
//!
//! ```text
//! https://host/download?id=42&_t=1700000000&_e=3600&_sign=<64 hex>
//! ```
//!
//! `_sign` is HMAC-SHA256 over every other parameter, sorted by key and
//! form-encoded. A `file` parameter, when present, carries an AES-256-CBC
//! encrypted resource path.
//!
//! ## Security Notes
//!
//! - Signatures are compared in constant time
//! - Expiry is checked against the issuance time carried in the link; links
//!   are not single-use
//! - The default payload cipher uses a key-derived static IV (see
//!   `shared_crypto::IvStrategy`)

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::clock::{FixedClock, SystemClock};
pub use adapters::key_store::{FileKeyStore, StaticKeyProvider, DEFAULT_KEY_FILE};
pub use domain::config::{SignerConfig, DEFAULT_EXPIRE_SECS};
pub use domain::errors::{ConfigError, SignerError};
pub use domain::params::{SignedParams, EXPIRE_KEY, FILE_KEY, SIGNATURE_KEY, TIMESTAMP_KEY};
pub use domain::signature::Signature;
pub use ports::inbound::SignedUrlApi;
pub use ports::outbound::{Clock, KeyProvider, ProvisionError};
pub use service::UrlSigner;
pub use shared_crypto::{IvStrategy, SecretKey};

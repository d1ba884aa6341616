//! # Shared Crypto - Primitives for Signed Links
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `keys` | - | Opaque secret key material |
//! | `hashing` | SHA-256 | Cipher key / IV derivation |
//! | `mac` | HMAC-SHA256 | Query-string signatures |
//! | `symmetric` | AES-256-CBC + PKCS#7 | Embedded payload encryption |
//!
//! ## Security Properties
//!
//! - **HMAC-SHA256**: keyed integrity tag, verified in constant time
//! - **AES-256-CBC**: the default `Derived` IV strategy reuses part of the key
//!   hash as IV, so encryption is deterministic per key. `Random` prefixes a
//!   fresh IV to each ciphertext.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod keys;
pub mod mac;
pub mod symmetric;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{derive_cipher_material, sha256, CipherMaterial, Hash};
pub use keys::SecretKey;
pub use mac::{constant_time_eq, hmac_sha256, hmac_sha256_hex, verify_hmac_sha256_hex};
pub use symmetric::{decrypt, encrypt, IvStrategy, PayloadCipher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Signer Errors
//!
//! Validation failures are not errors: `validate` returns `false` for expired,
//! incomplete, or forged links. The types here cover misconfiguration and
//! payload decryption, which indicate a key mismatch or corrupted input.

use crate::ports::outbound::ProvisionError;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No usable secret key was supplied
    #[error("No secret key configured")]
    MissingSecretKey,

    /// Default expiry is not a non-negative integer
    #[error("Invalid default expiry: {0:?}")]
    InvalidDefaultExpire(String),
}

/// Errors surfaced by `UrlSigner`.
#[derive(Debug, Error)]
pub enum SignerError {
    /// Signer could not be configured
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Key provisioning failed
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// Encryption, decryption, or MAC failure
    #[error("Cipher failure: {0}")]
    Cipher(#[from] CryptoError),

    /// Decrypted payload is not UTF-8 text
    #[error("Decrypted payload is not valid UTF-8")]
    InvalidUtf8,
}

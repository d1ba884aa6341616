//! # Link Signatures
//!
//! HMAC-SHA256 over the canonical query string of a parameter set.
//!
//! ## Security Properties
//!
//! - Order independent: parameters are sorted before encoding
//! - `_sign` never contributes to its own MAC
//! - Verification compares in constant time

use super::encoding::canonical_query;
use super::params::SignedParams;
use shared_crypto::{hmac_sha256_hex, verify_hmac_sha256_hex, CryptoError, SecretKey};
use std::fmt;

/// Lowercase hex HMAC-SHA256 tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    /// Hex text of the tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the hex string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sign the canonical form of `params`.
pub fn sign(params: &SignedParams, key: &SecretKey) -> Result<Signature, CryptoError> {
    let base = canonical_query(params);
    hmac_sha256_hex(key.as_bytes(), base.as_bytes()).map(Signature)
}

/// Check `claimed` against the signature of `params`.
pub fn verify(claimed: &str, params: &SignedParams, key: &SecretKey) -> bool {
    let base = canonical_query(params);
    verify_hmac_sha256_hex(key.as_bytes(), base.as_bytes(), claimed)
}

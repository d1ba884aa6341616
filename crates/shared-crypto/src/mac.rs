//! # HMAC-SHA256
//!
//! Keyed tags for canonical query strings. Tags travel as lowercase hex.

use crate::CryptoError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded HMAC-SHA256 tag.
pub const MAC_HEX_LEN: usize = 64;

/// Compute HMAC-SHA256 over `message`.
///
/// # Errors
///
/// Returns `CryptoError::MacInit` if the MAC cannot be keyed. HMAC accepts
/// keys of any length, so this is not expected in practice.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<[u8; 32], CryptoError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| CryptoError::MacInit(e.to_string()))?;
    mac.update(message);
    let tag = mac.finalize().into_bytes();

    let mut out = [0u8; 32];
    out.copy_from_slice(&tag);
    Ok(out)
}

/// Compute HMAC-SHA256 and encode it as lowercase hex.
pub fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> Result<String, CryptoError> {
    hmac_sha256(key, message).map(hex::encode)
}

/// Constant-time byte comparison.
///
/// Lengths are compared first; only equal-length inputs are compared in
/// constant time.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Recompute the tag for `message` and compare it with `claimed_hex`.
pub fn verify_hmac_sha256_hex(key: &[u8], message: &[u8], claimed_hex: &str) -> bool {
    match hmac_sha256_hex(key, message) {
        Ok(expected) => constant_time_eq(expected.as_bytes(), claimed_hex.as_bytes()),
        Err(_) => false,
    }
}

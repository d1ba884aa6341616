//! # SHA-256 Hashing and Key Derivation
//!
//! The payload cipher needs a fixed 32-byte AES key from a secret of any
//! length. Both the key and the derived IV come from one SHA-256 digest:
//!
//! ```text
//! digest = SHA-256(secret)
//! key    = digest[0..32]
//! iv     = digest[0..16]
//! ```
//!
//! The IV is therefore static per secret. See `symmetric::IvStrategy`.

use crate::SecretKey;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    let digest = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// AES key and derived IV for one secret.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherMaterial {
    key: [u8; 32],
    iv: [u8; 16],
}

impl CipherMaterial {
    /// AES-256 key.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// IV taken from the first half of the key digest.
    pub fn derived_iv(&self) -> &[u8; 16] {
        &self.iv
    }
}

/// Derive the AES key and static IV from a secret.
pub fn derive_cipher_material(secret: &SecretKey) -> CipherMaterial {
    let mut key = sha256(secret.as_bytes());
    let mut iv = [0u8; 16];
    iv.copy_from_slice(&key[..16]);
    let material = CipherMaterial { key, iv };
    key.zeroize();
    iv.zeroize();
    material
}

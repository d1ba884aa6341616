//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
///
/// Decryption failures are split by cause so callers can tell a corrupted
/// link (`InvalidEncoding`, `InvalidCiphertextLength`) from a key mismatch
/// (`InvalidPadding`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// IV is not one AES block long
    #[error("Invalid IV length: expected {expected}, got {actual}")]
    InvalidIvLength {
        /// Expected IV length in bytes
        expected: usize,
        /// Actual IV length in bytes
        actual: usize,
    },

    /// MAC could not be keyed
    #[error("MAC initialization failed: {0}")]
    MacInit(String),

    /// Ciphertext is not valid base64
    #[error("Invalid ciphertext encoding: {0}")]
    InvalidEncoding(String),

    /// Ciphertext is empty or not block aligned
    #[error("Invalid ciphertext length: {len} bytes")]
    InvalidCiphertextLength {
        /// Decoded ciphertext length in bytes
        len: usize,
    },

    /// PKCS#7 padding check failed after decryption
    #[error("Invalid padding (wrong key or corrupted ciphertext)")]
    InvalidPadding,
}

//! # Symmetric Encryption
//!
//! AES-256-CBC with PKCS#7 padding, base64 (standard alphabet) for transport.
//!
//! ## IV Strategies
//!
//! - **Derived** (default): IV = first 16 bytes of `SHA-256(secret)`. Output is
//!   `base64(ciphertext)`. Deterministic per key: equal plaintexts produce
//!   equal ciphertexts. Kept for compatibility with links issued by existing
//!   deployments.
//! - **Random**: fresh IV from the OS CSPRNG. Output is
//!   `base64(iv || ciphertext)`. Not readable by the `Derived` strategy.

use crate::hashing::{derive_cipher_material, CipherMaterial};
use crate::{CryptoError, SecretKey};
use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{rngs::OsRng, RngCore};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// CBC IV size in bytes.
pub const IV_SIZE: usize = 16;

/// IV selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IvStrategy {
    /// Static IV derived from the key hash (wire compatible, deterministic)
    #[default]
    Derived,
    /// Random per-message IV prefixed to the ciphertext
    Random,
}

/// Payload cipher bound to one secret.
#[derive(Clone)]
pub struct PayloadCipher {
    material: CipherMaterial,
    strategy: IvStrategy,
}

impl PayloadCipher {
    /// Create a cipher using the default `Derived` IV strategy.
    pub fn new(secret: &SecretKey) -> Self {
        Self::with_strategy(secret, IvStrategy::default())
    }

    /// Create a cipher with an explicit IV strategy.
    pub fn with_strategy(secret: &SecretKey, strategy: IvStrategy) -> Self {
        Self {
            material: derive_cipher_material(secret),
            strategy,
        }
    }

    /// Active IV strategy.
    pub fn strategy(&self) -> IvStrategy {
        self.strategy
    }

    /// Encrypt `plaintext` and return base64 text.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidIvLength` if the cipher cannot be keyed.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String, CryptoError> {
        let framed = match self.strategy {
            IvStrategy::Derived => self.encrypt_raw(self.material.derived_iv(), plaintext)?,
            IvStrategy::Random => {
                let mut iv = [0u8; IV_SIZE];
                OsRng.fill_bytes(&mut iv);
                let mut framed = iv.to_vec();
                framed.extend_from_slice(&self.encrypt_raw(&iv, plaintext)?);
                framed
            }
        };

        Ok(STANDARD.encode(framed))
    }

    /// Decrypt base64 text produced by [`PayloadCipher::encrypt`].
    ///
    /// # Errors
    ///
    /// - `CryptoError::InvalidEncoding` - not valid base64
    /// - `CryptoError::InvalidCiphertextLength` - empty or not block aligned
    /// - `CryptoError::InvalidPadding` - padding check failed (usually a wrong key)
    pub fn decrypt(&self, encoded: &str) -> Result<Vec<u8>, CryptoError> {
        let data = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;

        match self.strategy {
            IvStrategy::Derived => self.decrypt_raw(self.material.derived_iv(), &data),
            IvStrategy::Random => {
                if data.len() < IV_SIZE + BLOCK_SIZE {
                    return Err(CryptoError::InvalidCiphertextLength { len: data.len() });
                }
                let (iv, body) = data.split_at(IV_SIZE);
                self.decrypt_raw(iv, body)
            }
        }
    }

    fn encrypt_raw(&self, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let cipher = Aes256CbcEnc::new_from_slices(self.material.key(), iv).map_err(|_| {
            CryptoError::InvalidIvLength {
                expected: IV_SIZE,
                actual: iv.len(),
            }
        })?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt_raw(&self, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CryptoError::InvalidCiphertextLength {
                len: ciphertext.len(),
            });
        }

        let cipher = Aes256CbcDec::new_from_slices(self.material.key(), iv).map_err(|_| {
            CryptoError::InvalidIvLength {
                expected: IV_SIZE,
                actual: iv.len(),
            }
        })?;
        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CryptoError::InvalidPadding)
    }
}

/// Encrypt with the `Derived` IV strategy (one-shot).
pub fn encrypt(secret: &SecretKey, plaintext: &[u8]) -> Result<String, CryptoError> {
    PayloadCipher::new(secret).encrypt(plaintext)
}

/// Decrypt with the `Derived` IV strategy (one-shot).
pub fn decrypt(secret: &SecretKey, encoded: &str) -> Result<Vec<u8>, CryptoError> {
    PayloadCipher::new(secret).decrypt(encoded)
}

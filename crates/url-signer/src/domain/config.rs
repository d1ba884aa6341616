//! Signer configuration with validation.

use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use shared_crypto::SecretKey;
use std::env;

/// Validity window used when `sign` is called without one.
pub const DEFAULT_EXPIRE_SECS: u64 = 3600;

/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "URL_SIGNER_SECRET_KEY";

/// Environment variable holding the default validity window, in seconds.
pub const ENV_DEFAULT_EXPIRE: &str = "URL_SIGNER_DEFAULT_EXPIRE";

/// Key material and defaults for a `UrlSigner`.
#[derive(Debug, Clone)]
pub struct SignerConfig {
    /// Secret shared by the MAC and the payload cipher
    pub secret_key: SecretKey,
    /// Default validity window in seconds
    pub default_expire: u64,
}

impl SignerConfig {
    /// Create a configuration.
    pub fn new(secret_key: impl Into<SecretKey>, default_expire: u64) -> Self {
        Self {
            secret_key: secret_key.into(),
            default_expire,
        }
    }

    /// Create a configuration with the default validity window.
    pub fn with_secret(secret_key: impl Into<SecretKey>) -> Self {
        Self::new(secret_key, DEFAULT_EXPIRE_SECS)
    }

    /// Load from `URL_SIGNER_SECRET_KEY` / `URL_SIGNER_DEFAULT_EXPIRE`.
    ///
    /// Returns `Ok(None)` when no key is set, so callers can fall back to a
    /// `KeyProvider`.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup(ENV_SECRET_KEY) {
            Some(secret) if !secret.is_empty() => secret,
            _ => return Ok(None),
        };

        let default_expire = match lookup(ENV_DEFAULT_EXPIRE) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDefaultExpire(raw))?,
            None => DEFAULT_EXPIRE_SECS,
        };

        Ok(Some(Self::new(secret, default_expire)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.is_empty() {
            return Err(ConfigError::MissingSecretKey);
        }
        Ok(())
    }
}

/// On-disk form written by the file key store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedConfig {
    /// Hex secret key
    #[serde(rename = "secretKey", default)]
    pub secret_key: String,
    /// Default validity window in seconds
    #[serde(default = "default_expire")]
    pub default_expire: u64,
}

fn default_expire() -> u64 {
    DEFAULT_EXPIRE_SECS
}

impl PersistedConfig {
    /// Convert into a runtime configuration. `None` when the key is empty.
    pub fn into_config(self) -> Option<SignerConfig> {
        if self.secret_key.is_empty() {
            return None;
        }
        Some(SignerConfig::new(self.secret_key, self.default_expire))
    }
}

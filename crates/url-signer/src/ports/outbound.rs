//! # Outbound Ports (Driven Ports / SPI)
//!
//! Key supply and time, the two things the signer reads from outside.

use crate::domain::config::SignerConfig;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Error from key provisioning.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Reading, writing, or locking the key store failed
    #[error("Key store I/O failed at {path:?}: {source}")]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Stored configuration is not valid JSON
    #[error("Key store at {path:?} is malformed: {reason}")]
    Malformed {
        /// Path of the key store
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Key was written but could not be read back
    #[error("Key store at {path:?} holds no key after provisioning")]
    EmptyKey {
        /// Path of the key store
        path: PathBuf,
    },
}

/// Supplies the secret key and default expiry.
///
/// Called once by the composition root; the signer never re-provisions.
pub trait KeyProvider: Send + Sync {
    /// Return an existing configuration or create and persist a new one.
    ///
    /// # Errors
    /// * `ProvisionError::Io` - the store cannot be read or written
    /// * `ProvisionError::Malformed` - the store exists but cannot be parsed
    /// * `ProvisionError::EmptyKey` - no key could be produced
    fn provision(&self) -> Result<SignerConfig, ProvisionError>;
}

/// Source of the current Unix time, in seconds.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now_unix(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_unix(&self) -> i64 {
        (**self).now_unix()
    }
}

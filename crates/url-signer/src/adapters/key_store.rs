//! # Key Store Adapters
//!
//! `FileKeyStore` keeps the signer configuration in a JSON file and creates
//! it on first use:
//!
//! ```json
//! { "secretKey": "<32 hex chars>", "default_expire": 3600 }
//! ```
//!
//! Concurrent first runs are serialized with an advisory lock on
//! `<file>.lock`; whichever process takes the lock first writes the key and
//! the others read it back.

use crate::domain::config::{PersistedConfig, SignerConfig, DEFAULT_EXPIRE_SECS};
use crate::ports::outbound::{KeyProvider, ProvisionError};
use fs2::FileExt;
use rand::{rngs::OsRng, RngCore};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default location of the key file, relative to the working directory.
pub const DEFAULT_KEY_FILE: &str = "config/urlsigner.json";

/// Random bytes in a generated key (hex-encoded to twice this length).
pub const GENERATED_KEY_BYTES: usize = 16;

/// JSON file-backed key provider.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    path: PathBuf,
    default_expire: u64,
}

impl FileKeyStore {
    /// Key store at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_expire: DEFAULT_EXPIRE_SECS,
        }
    }

    /// Expiry written alongside a freshly generated key.
    pub fn with_default_expire(mut self, default_expire: u64) -> Self {
        self.default_expire = default_expire;
        self
    }

    /// Path of the key file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> ProvisionError {
        ProvisionError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Stored configuration, or `None` when absent or holding an empty key.
    fn read_existing(&self) -> Result<Option<SignerConfig>, ProvisionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let persisted: PersistedConfig =
            serde_json::from_str(&raw).map_err(|e| ProvisionError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let config = persisted.into_config();
        if config.is_none() {
            warn!(path = %self.path.display(), "Key store holds an empty key, regenerating");
        }
        Ok(config)
    }

    fn persist(&self, persisted: &PersistedConfig) -> Result<(), ProvisionError> {
        let body =
            serde_json::to_string_pretty(persisted).map_err(|e| ProvisionError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        // Write beside the target, then rename into place.
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let mut file = open_private(&tmp_path).map_err(|e| self.io_error(&tmp_path, e))?;
        file.write_all(body.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| self.io_error(&tmp_path, e))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(&self.path, e))
    }

    fn provision_locked(&self) -> Result<SignerConfig, ProvisionError> {
        if let Some(config) = self.read_existing()? {
            debug!(path = %self.path.display(), "Key provisioned by a concurrent writer");
            return Ok(config);
        }

        self.persist(&PersistedConfig {
            secret_key: generate_key(),
            default_expire: self.default_expire,
        })?;

        info!(
            path = %self.path.display(),
            default_expire = self.default_expire,
            "Generated new signing key"
        );

        self.read_existing()?.ok_or_else(|| ProvisionError::EmptyKey {
            path: self.path.clone(),
        })
    }
}

impl KeyProvider for FileKeyStore {
    fn provision(&self) -> Result<SignerConfig, ProvisionError> {
        if let Some(config) = self.read_existing()? {
            debug!(path = %self.path.display(), "Loaded signing key");
            return Ok(config);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| self.io_error(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| self.io_error(&lock_path, e))?;

        let result = self.provision_locked();

        if let Err(e) = FileExt::unlock(&lock_file) {
            warn!(path = %lock_path.display(), error = %e, "Failed to release key store lock");
        }
        result
    }
}

/// Provider returning a fixed configuration.
#[derive(Debug, Clone)]
pub struct StaticKeyProvider {
    config: SignerConfig,
}

impl StaticKeyProvider {
    /// Wrap an existing configuration.
    pub fn new(config: SignerConfig) -> Self {
        Self { config }
    }
}

impl KeyProvider for StaticKeyProvider {
    fn provision(&self) -> Result<SignerConfig, ProvisionError> {
        Ok(self.config.clone())
    }
}

/// Fresh hex key from the OS CSPRNG.
fn generate_key() -> String {
    let mut bytes = [0u8; GENERATED_KEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
}

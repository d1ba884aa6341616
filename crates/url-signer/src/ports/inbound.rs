//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the signer.

use crate::domain::errors::SignerError;
use crate::domain::params::SignedParams;

/// Primary signed-link API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SignedUrlApi: Send + Sync {
    // =========================================================================
    // Issuing
    // =========================================================================

    /// Stamp `params` with `_t`/`_e`, sign them, and append them to `base_url`.
    ///
    /// `expire` overrides the configured default window, in seconds.
    fn sign(
        &self,
        base_url: &str,
        params: SignedParams,
        expire: Option<u64>,
    ) -> Result<String, SignerError>;

    /// As [`SignedUrlApi::sign`], carrying `payload` encrypted in the `file`
    /// parameter.
    fn sign_payload(
        &self,
        base_url: &str,
        payload: &str,
        expire: Option<u64>,
    ) -> Result<String, SignerError>;

    // =========================================================================
    // Checking
    // =========================================================================

    /// True iff the link is complete, unexpired, and untampered.
    fn validate(&self, params: &SignedParams) -> bool;

    /// Parse the query of a received URL and [`SignedUrlApi::validate`] it.
    fn validate_url(&self, url: &str) -> bool;

    // =========================================================================
    // Payloads
    // =========================================================================

    /// Encrypt a value for use as a query parameter.
    fn encrypt_param(&self, value: &str) -> Result<String, SignerError>;

    /// Decrypt a value produced by [`SignedUrlApi::encrypt_param`].
    fn decrypt_param(&self, value: &str) -> Result<String, SignerError>;

    /// Decrypt a `file` parameter. Accepts the value either decoded or still
    /// percent-encoded as it appears in the URL.
    fn decrypt_file_param(&self, value: &str) -> Result<String, SignerError>;
}

//! # URL Signer Service
//!
//! Application service that implements the `SignedUrlApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`SignedUrlApi`)
//! - Reads time through the outbound `Clock` port
//! - Is built from a `SignerConfig`, usually obtained from a `KeyProvider`
//! - Delegates MAC and cipher work to the domain layer and `shared-crypto`
//!
//! A `UrlSigner` never mutates itself after construction and can be shared
//! across threads behind an `Arc`.

use crate::adapters::clock::SystemClock;
use crate::domain::config::SignerConfig;
use crate::domain::encoding::{append_query, build_query, parse_query, percent_decode, query_of};
use crate::domain::errors::SignerError;
use crate::domain::params::{SignedParams, EXPIRE_KEY, FILE_KEY, SIGNATURE_KEY, TIMESTAMP_KEY};
use crate::domain::signature;
use crate::ports::inbound::SignedUrlApi;
use crate::ports::outbound::{Clock, KeyProvider};
use shared_crypto::{IvStrategy, PayloadCipher, SecretKey};
use tracing::{debug, warn};

/// Signed-link facade.
pub struct UrlSigner<C: Clock = SystemClock> {
    secret_key: SecretKey,
    default_expire: u64,
    cipher: PayloadCipher,
    clock: C,
}

impl UrlSigner<SystemClock> {
    /// Create a signer from explicit configuration.
    ///
    /// # Errors
    /// * `ConfigError::MissingSecretKey` - the key is empty
    pub fn new(config: SignerConfig) -> Result<Self, SignerError> {
        config.validate()?;
        let cipher = PayloadCipher::new(&config.secret_key);
        Ok(Self {
            secret_key: config.secret_key,
            default_expire: config.default_expire,
            cipher,
            clock: SystemClock,
        })
    }

    /// Create a signer from whatever `provider` supplies.
    pub fn from_provider<P: KeyProvider + ?Sized>(provider: &P) -> Result<Self, SignerError> {
        Self::new(provider.provision()?)
    }
}

impl<C: Clock> UrlSigner<C> {
    /// Replace the time source.
    pub fn with_clock<D: Clock>(self, clock: D) -> UrlSigner<D> {
        UrlSigner {
            secret_key: self.secret_key,
            default_expire: self.default_expire,
            cipher: self.cipher,
            clock,
        }
    }

    /// Select the payload IV strategy. `Derived` is the default.
    pub fn with_iv_strategy(mut self, strategy: IvStrategy) -> Self {
        self.cipher = PayloadCipher::with_strategy(&self.secret_key, strategy);
        self
    }

    /// Window applied when `sign` is given no expiry.
    pub fn default_expire(&self) -> u64 {
        self.default_expire
    }

    /// Active payload IV strategy.
    pub fn iv_strategy(&self) -> IvStrategy {
        self.cipher.strategy()
    }

    /// Stamp, sign, and return `params` ready for a query string.
    pub fn sign_params(
        &self,
        mut params: SignedParams,
        expire: Option<u64>,
    ) -> Result<SignedParams, SignerError> {
        // A stale signature would otherwise keep its old position.
        params.remove(SIGNATURE_KEY);

        let expire = expire.unwrap_or(self.default_expire);
        params.insert(TIMESTAMP_KEY, self.clock.now_unix().to_string());
        params.insert(EXPIRE_KEY, expire.to_string());

        let signature = signature::sign(&params, &self.secret_key)?;
        params.insert(SIGNATURE_KEY, signature.into_string());

        debug!(params = params.len(), expire, "Signed link parameters");
        Ok(params)
    }
}

impl<C: Clock> SignedUrlApi for UrlSigner<C> {
    fn sign(
        &self,
        base_url: &str,
        params: SignedParams,
        expire: Option<u64>,
    ) -> Result<String, SignerError> {
        // Pairs already on the base URL are covered by the MAC but not repeated.
        let existing = if base_url.contains('?') {
            parse_query(query_of(base_url))
        } else {
            SignedParams::new()
        };
        let mut merged = existing.clone();
        merged.extend(params.iter());

        let signed = self.sign_params(merged, expire)?;
        let emitted: SignedParams = signed
            .iter()
            .filter(|(k, _)| {
                !existing.contains_key(k)
                    || params.contains_key(k)
                    || [TIMESTAMP_KEY, EXPIRE_KEY, SIGNATURE_KEY].contains(k)
            })
            .collect();
        Ok(append_query(base_url, &build_query(&emitted)))
    }

    fn sign_payload(
        &self,
        base_url: &str,
        payload: &str,
        expire: Option<u64>,
    ) -> Result<String, SignerError> {
        let params = SignedParams::new().with(FILE_KEY, self.encrypt_param(payload)?);
        self.sign(base_url, params, expire)
    }

    fn validate(&self, params: &SignedParams) -> bool {
        let (Some(claimed), Some(issued), Some(window)) = (
            params.get_non_empty(SIGNATURE_KEY),
            params.get_non_empty(TIMESTAMP_KEY),
            params.get_non_empty(EXPIRE_KEY),
        ) else {
            debug!("Rejected link: missing signature metadata");
            return false;
        };

        let unsigned = params.without(SIGNATURE_KEY);

        let (Ok(issued), Ok(window)) = (issued.parse::<i64>(), window.parse::<i64>()) else {
            warn!(issued, window, "Rejected link: non-numeric timestamp or expiry");
            return false;
        };

        let age = self.clock.now_unix().saturating_sub(issued);
        if age > window {
            debug!(age, window, "Rejected link: expired");
            return false;
        }

        let valid = signature::verify(claimed, &unsigned, &self.secret_key);
        if !valid {
            warn!("Rejected link: signature mismatch");
        }
        valid
    }

    fn validate_url(&self, url: &str) -> bool {
        self.validate(&parse_query(query_of(url)))
    }

    fn encrypt_param(&self, value: &str) -> Result<String, SignerError> {
        Ok(self.cipher.encrypt(value.as_bytes())?)
    }

    fn decrypt_param(&self, value: &str) -> Result<String, SignerError> {
        let plaintext = self.cipher.decrypt(value)?;
        String::from_utf8(plaintext).map_err(|_| SignerError::InvalidUtf8)
    }

    fn decrypt_file_param(&self, value: &str) -> Result<String, SignerError> {
        // Base64 never contains '%', so its presence means the value was
        // copied straight out of the URL.
        if value.contains('%') {
            return self.decrypt_param(&percent_decode(value));
        }
        self.decrypt_param(value)
    }
}

//! # Wire Format Vectors
//!
//! Fixed expected outputs for the signed-URL and payload formats. These pin
//! the exact bytes issued links carry, so a change in canonical encoding,
//! key derivation, or IV handling breaks here first.
//!
//! Vectors were produced outside this codebase with HMAC-SHA256 and
//! `openssl enc -aes-256-cbc`.

#[cfg(test)]
mod tests {
    use shared_crypto::{decrypt, encrypt, sha256, SecretKey};
    use std::sync::Arc;
    use url_signer::{
        FixedClock, SignedParams, SignedUrlApi, SignerConfig, UrlSigner, FILE_KEY,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const T: i64 = 1_700_000_000;

    fn key() -> String {
        "k".repeat(32)
    }

    fn signer() -> (UrlSigner<Arc<FixedClock>>, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(T));
        let signer = UrlSigner::new(SignerConfig::with_secret(key()))
            .unwrap()
            .with_clock(Arc::clone(&clock));
        (signer, clock)
    }

    // =============================================================================
    // SIGNED URL
    // =============================================================================

    #[test]
    fn test_download_link_vector() {
        let (signer, clock) = signer();
        let url = signer
            .sign(
                "https://x.test/download",
                SignedParams::new().with("id", "42"),
                None,
            )
            .unwrap();

        assert_eq!(
            url,
            "https://x.test/download?id=42&_t=1700000000&_e=3600\
             &_sign=34909c61fbd30942121ff5814930a91915ac15f80f9e22be3aaba2cc26cdfa55"
        );

        let params = SignedParams::new()
            .with("id", "42")
            .with("_t", "1700000000")
            .with("_e", "3600")
            .with(
                "_sign",
                "34909c61fbd30942121ff5814930a91915ac15f80f9e22be3aaba2cc26cdfa55",
            );
        assert!(signer.validate(&params));

        clock.set(T + 3601);
        assert!(!signer.validate(&params));
    }

    #[test]
    fn test_file_link_vector() {
        let (signer, _) = signer();
        let url = signer
            .sign_payload("https://x.test/download", "/home/file.zip", None)
            .unwrap();

        assert_eq!(
            url,
            "https://x.test/download?file=5NoMPT1JGvxyc4LOPFVmGw%3D%3D&_t=1700000000&_e=3600\
             &_sign=2bd14f0e0b865692b884650888f285523c10488ab8454849489a8685f503a02a"
        );
        assert!(signer.validate_url(&url));
    }

    // =============================================================================
    // PAYLOAD CIPHER
    // =============================================================================

    #[test]
    fn test_key_derivation_vector() {
        assert_eq!(
            hex::encode(sha256(key().as_bytes())),
            "5e318f8cf9cbe249a30812b8ca132d691ded7a91991413558db5758575f5e01f"
        );
    }

    #[test]
    fn test_static_iv_cipher_vectors() {
        let secret = SecretKey::from(key());

        let a = encrypt(&secret, b"/home/file.zip").unwrap();
        let b = encrypt(&secret, b"/home/file.zip").unwrap();
        assert_eq!(a, "5NoMPT1JGvxyc4LOPFVmGw==");
        assert_eq!(a, b);

        assert_eq!(encrypt(&secret, b"").unwrap(), "mudTAtAvmcvvA8s2Os32/A==");
        assert_eq!(decrypt(&secret, "mudTAtAvmcvvA8s2Os32/A==").unwrap(), b"");
    }

    #[test]
    fn test_decrypt_file_param_from_raw_url() {
        let (signer, _) = signer();
        assert_eq!(
            signer
                .decrypt_file_param("5NoMPT1JGvxyc4LOPFVmGw%3D%3D")
                .unwrap(),
            "/home/file.zip"
        );
        assert_eq!(
            signer.decrypt_param("5NoMPT1JGvxyc4LOPFVmGw==").unwrap(),
            "/home/file.zip"
        );
        assert_eq!(FILE_KEY, "file");
    }
}

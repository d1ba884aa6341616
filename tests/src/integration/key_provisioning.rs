//! # Key Provisioning Flows
//!
//! The file key store feeding `UrlSigner` across process restarts.

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use url_signer::{
        FileKeyStore, KeyProvider, SignedParams, SignedUrlApi, SignerError, UrlSigner,
    };

    #[test]
    fn test_links_survive_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("urlsigner.json");

        // First start generates the key
        let first = UrlSigner::from_provider(&FileKeyStore::new(&path)).unwrap();
        let url = first
            .sign("https://x.test/d", SignedParams::new().with("id", "1"), None)
            .unwrap();
        let encrypted = first.encrypt_param("/srv/a.zip").unwrap();
        drop(first);

        // Second start reads it back
        let second = UrlSigner::from_provider(&FileKeyStore::new(&path)).unwrap();
        assert!(second.validate_url(&url));
        assert_eq!(second.decrypt_param(&encrypted).unwrap(), "/srv/a.zip");
    }

    #[test]
    fn test_generated_file_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urlsigner.json");
        FileKeyStore::new(&path).provision().unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"secretKey\""));
        assert!(raw.contains("\"default_expire\": 3600"));
    }

    #[test]
    fn test_unusable_store_fails_construction() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urlsigner.json");
        fs::write(&path, "not json").unwrap();

        let result = UrlSigner::from_provider(&FileKeyStore::new(&path));
        assert!(matches!(result, Err(SignerError::Provision(_))));
    }

    #[test]
    fn test_default_expire_from_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urlsigner.json");
        fs::write(&path, r#"{"secretKey":"abcd","default_expire":90}"#).unwrap();

        let signer = UrlSigner::from_provider(&FileKeyStore::new(&path)).unwrap();
        assert_eq!(signer.default_expire(), 90);
        let url = signer
            .sign("https://x.test/d", SignedParams::new(), None)
            .unwrap();
        assert!(url.contains("&_e=90&"));
    }
}

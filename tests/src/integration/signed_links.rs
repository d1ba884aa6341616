//! # Signed Link Flows
//!
//! Issue a link, pass it through URL transport (string form, re-parsed by the
//! receiver), and validate it on the other side.
//!
//! ## Flows Tested:
//!
//! 1. **Issue → validate**: business parameters survive the round trip
//! 2. **Encoding normalization**: values that need escaping still verify
//! 3. **Shared signer**: one instance used from several threads
//! 4. **Key separation**: links from one deployment fail on another

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use url_signer::domain::encoding::{parse_query, query_of};
    use url_signer::{
        FixedClock, IvStrategy, SignedParams, SignedUrlApi, SignerConfig, UrlSigner,
        EXPIRE_KEY, FILE_KEY, SIGNATURE_KEY, TIMESTAMP_KEY,
    };

    const T: i64 = 1_750_000_000;

    fn signer_with(secret: &str, clock: &Arc<FixedClock>) -> UrlSigner<Arc<FixedClock>> {
        UrlSigner::new(SignerConfig::new(secret, 600))
            .unwrap()
            .with_clock(Arc::clone(clock))
    }

    #[test]
    fn test_issue_and_validate_business_params() {
        let clock = Arc::new(FixedClock::new(T));
        let issuer = signer_with("deployment-secret", &clock);
        let receiver = signer_with("deployment-secret", &clock);

        let url = issuer
            .sign(
                "https://cdn.test/get?bucket=media",
                SignedParams::new().with("user", "1001").with("asset", "42"),
                Some(120),
            )
            .unwrap();

        let received = parse_query(query_of(&url));
        assert_eq!(received.get("bucket"), Some("media"));
        assert_eq!(received.get("user"), Some("1001"));
        assert_eq!(received.get(TIMESTAMP_KEY), Some(T.to_string().as_str()));
        assert_eq!(received.get(EXPIRE_KEY), Some("120"));
        assert_eq!(received.get(SIGNATURE_KEY).map(str::len), Some(64));

        // `bucket` came from the base URL and is covered by the signature
        assert!(receiver.validate(&received));
        assert!(receiver.validate_url(&url));
        assert!(!receiver.validate(&received.without("bucket")));

        clock.advance(121);
        assert!(!receiver.validate_url(&url));
    }

    #[test]
    fn test_escaped_values_survive_transport() {
        let clock = Arc::new(FixedClock::new(T));
        let signer = signer_with("s", &clock);

        let tricky = [
            ("space", "two words"),
            ("plus", "1+1=2"),
            ("amp", "a&b"),
            ("pct", "50%"),
            ("tilde", "~user"),
            ("star", "*.zip"),
            ("slash", "/srv/a/b"),
            ("unicode", "résumé 履歴書"),
            ("empty", ""),
        ];
        let url = signer
            .sign("https://x.test/d", tricky.iter().copied().collect(), None)
            .unwrap();

        assert!(signer.validate_url(&url));

        let received = parse_query(query_of(&url));
        for (k, v) in tricky {
            assert_eq!(received.get(k), Some(v), "{}", k);
        }
    }

    #[test]
    fn test_payload_link_flow() {
        let clock = Arc::new(FixedClock::new(T));
        let signer = signer_with("s", &clock).with_iv_strategy(IvStrategy::Random);

        let url = signer
            .sign_payload("https://x.test/d", "/srv/private/q3 report.pdf", None)
            .unwrap();
        assert!(signer.validate_url(&url));

        let received = parse_query(query_of(&url));
        let file = received.get(FILE_KEY).unwrap();
        assert_eq!(
            signer.decrypt_file_param(file).unwrap(),
            "/srv/private/q3 report.pdf"
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let clock = Arc::new(FixedClock::new(T));
        let signer = Arc::new(signer_with("shared", &clock));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let signer = Arc::clone(&signer);
                thread::spawn(move || {
                    let url = signer
                        .sign(
                            "https://x.test/d",
                            SignedParams::new().with("n", i.to_string()),
                            None,
                        )
                        .unwrap();
                    signer.validate_url(&url)
                })
            })
            .collect();

        assert!(handles.into_iter().all(|h| h.join().unwrap()));
    }

    #[test]
    fn test_links_do_not_cross_deployments() {
        let clock = Arc::new(FixedClock::new(T));
        let a = signer_with("deployment-a", &clock);
        let b = signer_with("deployment-b", &clock);

        let url = a
            .sign("https://x.test/d", SignedParams::new().with("id", "7"), None)
            .unwrap();
        assert!(a.validate_url(&url));
        assert!(!b.validate_url(&url));
    }

    #[test]
    fn test_truncated_link_rejected() {
        let clock = Arc::new(FixedClock::new(T));
        let signer = signer_with("s", &clock);
        let url = signer
            .sign("https://x.test/d", SignedParams::new().with("id", "7"), None)
            .unwrap();

        let truncated = &url[..url.len() - 1];
        assert!(!signer.validate_url(truncated));

        let without_sig = url.split("&_sign=").next().unwrap();
        assert!(!signer.validate_url(without_sig));
    }
}

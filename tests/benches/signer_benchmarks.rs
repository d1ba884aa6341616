//! # Signed Link Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Sign a link | < 20μs |
//! | Validate a link | < 20μs |
//! | Encrypt / decrypt a path | < 5μs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_crypto::{IvStrategy, PayloadCipher, SecretKey};
use std::time::Duration;
use url_signer::domain::encoding::{parse_query, query_of};
use url_signer::{SignedParams, SignedUrlApi, SignerConfig, UrlSigner};

// ============================================================================
// Signing and validation
// ============================================================================

fn bench_sign_and_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed-links");
    group.measurement_time(Duration::from_secs(5));

    let signer = match UrlSigner::new(SignerConfig::with_secret("k".repeat(32))) {
        Ok(signer) => signer,
        Err(e) => panic!("signer setup failed: {}", e),
    };

    for size in [1usize, 8, 32] {
        let params: SignedParams = (0..size)
            .map(|i| (format!("param_{}", i), format!("value {}", i)))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sign", size), &params, |b, params| {
            b.iter(|| black_box(signer.sign("https://x.test/d", params.clone(), None).is_ok()))
        });

        let url = signer
            .sign("https://x.test/d", params.clone(), None)
            .unwrap_or_default();
        let received = parse_query(query_of(&url));
        group.bench_with_input(BenchmarkId::new("validate", size), &received, |b, received| {
            b.iter(|| black_box(signer.validate(received)))
        });
    }

    group.finish();
}

// ============================================================================
// Payload cipher
// ============================================================================

fn bench_payload_cipher(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload-cipher");
    let secret = SecretKey::from("k".repeat(32));
    let path = b"/home/wwwroot/file/test.zip";

    for strategy in [IvStrategy::Derived, IvStrategy::Random] {
        let cipher = PayloadCipher::with_strategy(&secret, strategy);
        let encrypted = cipher.encrypt(path).unwrap_or_default();

        group.bench_function(format!("encrypt_{:?}", strategy), |b| {
            b.iter(|| black_box(cipher.encrypt(path).is_ok()))
        });
        group.bench_function(format!("decrypt_{:?}", strategy), |b| {
            b.iter(|| black_box(cipher.decrypt(&encrypted).is_ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sign_and_validate, bench_payload_cipher);
criterion_main!(benches);

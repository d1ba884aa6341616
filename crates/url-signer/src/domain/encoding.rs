//! # Query-String Encoding
//!
//! Canonical form used both for the signature base and for emitted URLs:
//!
//! - ASCII alphanumerics and `-`, `_`, `.` pass through
//! - space becomes `+`
//! - every other byte becomes `%XX` (uppercase hex)
//! - pairs are `key=value`, joined by `&`
//!
//! This matches PHP's `http_build_query`, so links issued by existing PHP
//! deployments verify here and vice versa.
//!
//! Decoding uses `application/x-www-form-urlencoded` rules. Re-encoding a
//! decoded value yields the bytes that were signed, because the encoding is a
//! function of the decoded value alone.

use super::params::{SignedParams, SIGNATURE_KEY};
use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

const URLENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Encode one key or value.
pub fn urlencode(input: &str) -> String {
    // A literal '%' encodes to "%25", so "%20" can only come from a space.
    percent_encode(input.as_bytes(), URLENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

fn join_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signature base: every parameter except `_sign`, sorted by key.
pub fn canonical_query(params: &SignedParams) -> String {
    join_pairs(
        params
            .sorted()
            .into_iter()
            .filter(|(k, _)| *k != SIGNATURE_KEY),
    )
}

/// Query string in insertion order, `_sign` included.
pub fn build_query(params: &SignedParams) -> String {
    join_pairs(params.iter())
}

/// Append a query string, using `&` when the URL already has a query.
pub fn append_query(base_url: &str, query: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base_url, separator, query)
}

/// Query component of a URL, without the fragment.
///
/// A string without `?` is taken to be a bare query.
pub fn query_of(url: &str) -> &str {
    let query = match url.split_once('?') {
        Some((_, query)) => query,
        None => url,
    };
    query.split_once('#').map_or(query, |(query, _)| query)
}

/// Decode a query string. Repeated keys keep the last value.
pub fn parse_query(query: &str) -> SignedParams {
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Percent-decode a single value, leaving `+` untouched.
pub fn percent_decode(value: &str) -> Cow<'_, str> {
    percent_decode_str(value).decode_utf8_lossy()
}

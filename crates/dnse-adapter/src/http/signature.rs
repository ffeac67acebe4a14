/*
[INPUT]:  Request method/path, date header value, API secret, optional nonce
[OUTPUT]: Date header string and percent-escaped base64 HMAC signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing the canonical string or digest selection
*/

use std::fmt;
use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

/// Header list advertised inside the signature header. The server pins this
/// to "(request-target) date" even when a nonce joins the canonical string.
pub const SIGNED_HEADERS: &str = "(request-target) date";

/// Characters the standard base64 alphabet can emit that must be escaped to
/// stay encodeURIComponent-compatible.
const BASE64_RESERVED: &AsciiSet = &CONTROLS.add(b'+').add(b'/').add(b'=').add(b' ');

/// HMAC algorithm names accepted by the DNSE OpenAPI signature scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    HmacSha256,
    HmacSha384,
    HmacSha512,
    /// Unrecognized names are carried verbatim into the signature header and
    /// sign with HMAC-SHA1, matching the server-side fallback.
    Other(String),
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::HmacSha256
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::HmacSha256 => f.write_str("hmac-sha256"),
            Algorithm::HmacSha384 => f.write_str("hmac-sha384"),
            Algorithm::HmacSha512 => f.write_str("hmac-sha512"),
            Algorithm::Other(name) => f.write_str(name),
        }
    }
}

impl FromStr for Algorithm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "hmac-sha256" => Algorithm::HmacSha256,
            "hmac-sha384" => Algorithm::HmacSha384,
            "hmac-sha512" => Algorithm::HmacSha512,
            other => Algorithm::Other(other.to_string()),
        })
    }
}

/// Output of [`build_signature`], ready for header rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureResult {
    pub headers: &'static str,
    pub signature: String,
}

/// Formats an instant as the value the server expects in the `Date` header:
/// `"Ddd, DD Mon YYYY HH:MM:SS +0000"`, always in UTC.
pub fn format_date_header(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
}

/// Computes the request signature over the canonical signing string.
///
/// The signature is the base64 HMAC digest of the canonical string,
/// percent-escaped so it can sit verbatim inside the signature header.
pub fn build_signature(
    secret: &str,
    method: &str,
    path: &str,
    date_value: &str,
    algorithm: &Algorithm,
    nonce: Option<&str>,
) -> SignatureResult {
    let message = canonical_string(method, path, date_value, nonce);
    let digest = match algorithm {
        Algorithm::HmacSha256 => hmac_digest::<Hmac<Sha256>>(secret, &message),
        Algorithm::HmacSha384 => hmac_digest::<Hmac<Sha384>>(secret, &message),
        Algorithm::HmacSha512 => hmac_digest::<Hmac<Sha512>>(secret, &message),
        Algorithm::Other(_) => hmac_digest::<Hmac<Sha1>>(secret, &message),
    };
    let encoded = BASE64.encode(digest);
    SignatureResult {
        headers: SIGNED_HEADERS,
        signature: utf8_percent_encode(&encoded, BASE64_RESERVED).to_string(),
    }
}

/// The canonical signing string. The path is the bare request path: no query
/// string, no host. The nonce line is present only when a nonce is supplied;
/// [`SIGNED_HEADERS`] never mentions it.
fn canonical_string(method: &str, path: &str, date_value: &str, nonce: Option<&str>) -> String {
    let mut canonical = format!(
        "(request-target): {} {}\ndate: {}",
        method.to_ascii_lowercase(),
        path,
        date_value
    );
    if let Some(nonce) = nonce {
        canonical.push_str("\nnonce: ");
        canonical.push_str(nonce);
    }
    canonical
}

fn hmac_digest<M>(secret: &str, message: &str) -> Vec<u8>
where
    M: Mac + KeyInit,
{
    let mut mac =
        <M as KeyInit>::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use chrono::TimeZone;
    use rstest::rstest;

    const DATE: &str = "Sun, 01 Jan 2023 00:00:00 +0000";

    fn unescape(signature: &str) -> String {
        signature
            .replace("%2B", "+")
            .replace("%2F", "/")
            .replace("%3D", "=")
    }

    #[test]
    fn test_format_date_header() {
        let instant = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date_header(instant), DATE);

        let instant = Utc.with_ymd_and_hms(2024, 7, 9, 5, 3, 7).unwrap();
        assert_eq!(format_date_header(instant), "Tue, 09 Jul 2024 05:03:07 +0000");
    }

    #[test]
    fn test_canonical_string_without_nonce() {
        let canonical = canonical_string("GET", "/accounts", DATE, None);
        assert_eq!(
            canonical,
            "(request-target): get /accounts\ndate: Sun, 01 Jan 2023 00:00:00 +0000"
        );
    }

    #[test]
    fn test_canonical_string_with_nonce() {
        let canonical = canonical_string("POST", "/accounts/orders", DATE, Some("abc"));
        assert_eq!(
            canonical,
            "(request-target): post /accounts/orders\ndate: Sun, 01 Jan 2023 00:00:00 +0000\nnonce: abc"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let first =
            build_signature("abc123", "GET", "/accounts", DATE, &Algorithm::HmacSha256, None);
        let second =
            build_signature("abc123", "GET", "/accounts", DATE, &Algorithm::HmacSha256, None);
        assert_eq!(first, second);
        assert_eq!(first.headers, "(request-target) date");
        assert!(!first.signature.is_empty());
    }

    #[test]
    fn test_nonce_changes_signature_but_not_headers() {
        let without =
            build_signature("abc123", "GET", "/accounts", DATE, &Algorithm::HmacSha256, None);
        let first = build_signature(
            "abc123",
            "GET",
            "/accounts",
            DATE,
            &Algorithm::HmacSha256,
            Some("0123456789abcdef0123456789abcdef"),
        );
        let second = build_signature(
            "abc123",
            "GET",
            "/accounts",
            DATE,
            &Algorithm::HmacSha256,
            Some("fedcba9876543210fedcba9876543210"),
        );

        assert_ne!(first.signature, second.signature);
        assert_ne!(without.signature, first.signature);
        assert_eq!(first.headers, SIGNED_HEADERS);
        assert_eq!(second.headers, SIGNED_HEADERS);
    }

    #[rstest]
    #[case(Algorithm::HmacSha256, 32)]
    #[case(Algorithm::HmacSha384, 48)]
    #[case(Algorithm::HmacSha512, 64)]
    #[case(Algorithm::Other("hmac-md5".to_string()), 20)]
    fn test_digest_length(#[case] algorithm: Algorithm, #[case] expected_len: usize) {
        let result = build_signature("abc123", "GET", "/accounts", DATE, &algorithm, None);
        let decoded = BASE64
            .decode(unescape(&result.signature))
            .expect("signature should decode as base64");
        assert_eq!(decoded.len(), expected_len);
    }

    #[test]
    fn test_signature_contains_no_reserved_characters() {
        let result =
            build_signature("abc123", "GET", "/accounts", DATE, &Algorithm::HmacSha512, None);
        assert!(!result.signature.contains('+'));
        assert!(!result.signature.contains('/'));
        assert!(!result.signature.contains('='));
        assert!(!result.signature.contains(' '));
    }

    #[test]
    fn test_algorithm_display_round_trip() {
        for name in ["hmac-sha256", "hmac-sha384", "hmac-sha512"] {
            let algorithm: Algorithm = name.parse().unwrap();
            assert_eq!(algorithm.to_string(), name);
            assert!(!matches!(algorithm, Algorithm::Other(_)));
        }

        let unknown: Algorithm = "hmac-md5".parse().unwrap();
        assert_eq!(unknown, Algorithm::Other("hmac-md5".to_string()));
        assert_eq!(unknown.to_string(), "hmac-md5");
    }
}

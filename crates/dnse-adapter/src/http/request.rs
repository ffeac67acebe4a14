/*
[INPUT]:  RequestSpec (method, path, query, body, extra headers, dry-run flag)
[OUTPUT]: Fully addressed and signed HTTP request parts
[POS]:    HTTP layer - request assembly ahead of transport
[UPDATE]: When header precedence or URL composition rules change
*/

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::http::client::ClientConfig;
use crate::http::error::Result;
use crate::http::signature::{build_signature, format_date_header};

/// Transient description of one API call. Built fresh per call, never shared.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(&'static str, Option<String>)>,
    pub(crate) body: Option<String>,
    pub(crate) headers: Vec<(&'static str, String)>,
    pub(crate) dry_run: bool,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            dry_run: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends a query parameter. Declaration order is preserved in the URL.
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, Some(value.to_string())));
        self
    }

    /// Appends an optional query parameter; `None` entries are dropped when
    /// the URL is assembled.
    pub fn query_opt<T: ToString>(mut self, key: &'static str, value: Option<T>) -> Self {
        self.query.push((key, value.map(|v| v.to_string())));
        self
    }

    /// Serializes `body` to compact JSON once, up front. Field order follows
    /// the payload struct declaration.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// Adds a caller-supplied header. These win over same-named fixed headers.
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Assembled request parts, ready for the transport (or for dry-run logging).
#[derive(Debug)]
pub struct PreparedRequest {
    pub url: Url,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Composes the URL, header set, and body for one call.
///
/// Fixed headers land first (`Date`, `X-Signature`, `x-api-key`, and
/// `Content-Type` when a body is present); caller-supplied headers then
/// replace any fixed header with the same name.
pub(crate) fn prepare(
    config: &ClientConfig,
    spec: &RequestSpec,
    now: DateTime<Utc>,
    nonce: Option<&str>,
) -> Result<PreparedRequest> {
    let url = build_url(&config.base_url, spec)?;
    let date_value = format_date_header(now);
    let signature = build_signature(
        &config.api_secret,
        spec.method.as_str(),
        &spec.path,
        &date_value,
        &config.algorithm,
        nonce,
    );

    let mut signature_header = format!(
        "Signature keyId=\"{}\",algorithm=\"{}\",headers=\"{}\",signature=\"{}\"",
        config.api_key, config.algorithm, signature.headers, signature.signature
    );
    if let Some(nonce) = nonce {
        signature_header.push_str(&format!(",nonce=\"{nonce}\""));
    }

    let mut headers: Vec<(String, String)> = vec![
        ("Date".to_string(), date_value),
        ("X-Signature".to_string(), signature_header),
        ("x-api-key".to_string(), config.api_key.clone()),
    ];
    if spec.body.is_some() {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
    }
    for (name, value) in &spec.headers {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        headers.push((name.to_string(), value.clone()));
    }

    Ok(PreparedRequest {
        url,
        method: spec.method.clone(),
        headers,
        body: spec.body.clone(),
    })
}

fn build_url(base_url: &str, spec: &RequestSpec) -> Result<Url> {
    let mut url = Url::parse(&format!("{base_url}{}", spec.path))?;
    if spec.query.iter().any(|(_, value)| value.is_some()) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &spec.query {
            if let Some(value) = value {
                pairs.append_pair(key, value);
            }
        }
    }
    Ok(url)
}

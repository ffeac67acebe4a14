/*
[INPUT]:  Client configuration (credentials, base URL, signing options)
[OUTPUT]: Configured reqwest client executing signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing the request flow
*/

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use tracing::info;
use uuid::Uuid;

use crate::http::error::Result;
use crate::http::request::{RequestSpec, prepare};
use crate::http::signature::Algorithm;

/// Default DNSE OpenAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openapi.dnse.com.vn";

/// HTTP client configuration. Immutable once a [`DnseClient`] owns it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    pub algorithm: Algorithm,
    /// When enabled, every request carries a fresh 32-char hex nonce in both
    /// the canonical string and the signature header.
    pub nonce_enabled: bool,
    /// Set once at startup (from DEBUG=true or --debug); logs every prepared
    /// request, including the raw signature and API key, for troubleshooting.
    pub debug: bool,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            algorithm: Algorithm::default(),
            nonce_enabled: true,
            debug: false,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_nonce_enabled(mut self, enabled: bool) -> Self {
        self.nonce_enabled = enabled;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Raw exchange outcome. Both fields are `None` exactly when the call was a
/// dry run; otherwise the unparsed body and status are passed through for the
/// caller to interpret (non-2xx is not an error here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl ApiResponse {
    /// Sentinel for dry-run calls that never reach the wire.
    pub fn dry_run() -> Self {
        Self {
            status: None,
            body: None,
        }
    }
}

/// Main HTTP client for the DNSE OpenAPI.
#[derive(Debug)]
pub struct DnseClient {
    http_client: Client,
    config: ClientConfig,
}

impl DnseClient {
    pub fn new(mut config: ClientConfig) -> Result<Self> {
        let trimmed = config.base_url.trim_end_matches('/').to_string();
        config.base_url = trimmed;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs one spec through the pipeline: sign, assemble, optionally log,
    /// then either short-circuit (dry run) or perform the exchange.
    pub(crate) async fn request(&self, spec: RequestSpec) -> Result<ApiResponse> {
        let nonce = self
            .config
            .nonce_enabled
            .then(|| Uuid::new_v4().simple().to_string());
        let prepared = prepare(&self.config, &spec, Utc::now(), nonce.as_deref())?;

        if self.config.debug || spec.dry_run {
            let tag = if spec.dry_run { "dry-run" } else { "debug" };
            info!(
                target: "dnse_adapter::request",
                tag,
                url = %prepared.url,
                method = %prepared.method,
                query = ?spec.query,
                headers = ?prepared.headers,
                body = prepared.body.as_deref().unwrap_or(""),
                "prepared request"
            );
        }

        if spec.dry_run {
            return Ok(ApiResponse::dry_run());
        }

        let mut builder = self.http_client.request(prepared.method, prepared.url);
        for (name, value) in &prepared.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = prepared.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse {
            status: Some(status),
            body: Some(body),
        })
    }
}

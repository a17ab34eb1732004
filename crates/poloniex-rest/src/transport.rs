//! HTTP transport abstraction
//!
//! The executor and the public client talk to the network only through the
//! [`Transport`] trait, so tests can inject a recording mock and several
//! clients can share one connection pool.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Request did not complete in time
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Could not reach the server (DNS, refused, TLS handshake)
    #[error("connection failed: {0}")]
    Connect(String),

    /// Request failed for another reason
    #[error("request failed: {0}")]
    Request(String),

    /// Response body could not be read as text
    #[error("failed to read response body: {0}")]
    Body(String),

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl TransportError {
    /// Check if the failure is likely temporary
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Connect(_))
    }

    fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Authentication headers of a signed request
#[derive(Clone)]
pub struct AuthHeaders {
    /// API key, sent as `Key`
    pub key: String,
    /// Hex HMAC-SHA512 of the body, sent as `Sign`
    pub sign: String,
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("key", &"[REDACTED]")
            .field("sign", &"[REDACTED]")
            .finish()
    }
}

/// Trait for HTTP transport abstraction
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a form-encoded body with `Key` and `Sign` headers
    ///
    /// `body` is sent exactly as given. Returns the response body.
    async fn post_authenticated(
        &self,
        url: &str,
        body: &str,
        headers: &AuthHeaders,
    ) -> Result<String, TransportError>;

    /// Plain GET without credentials. Returns the response body.
    async fn get_public(&self, url: &str) -> Result<String, TransportError>;
}

/// Real transport backed by one pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    public_timeout: Duration,
    trading_timeout: Duration,
}

impl HttpTransport {
    /// Create a transport from the given configuration
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }

        Ok(Self {
            client,
            public_timeout: config.public_timeout(),
            trading_timeout: config.trading_timeout(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, body, headers))]
    async fn post_authenticated(
        &self,
        url: &str,
        body: &str,
        headers: &AuthHeaders,
    ) -> Result<String, TransportError> {
        let timeout = self.trading_timeout;
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .header("Key", headers.key.as_str())
            .header("Sign", headers.sign.as_str())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body.to_owned())
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))?;

        debug!(status = %response.status(), "Trading API responded");

        response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))
    }

    #[instrument(skip(self))]
    async fn get_public(&self, url: &str) -> Result<String, TransportError> {
        let timeout = self.public_timeout;
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))?;

        debug!(status = %response.status(), "Public API responded");

        response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))
    }
}

//! Client configuration

use poloniex_auth::Credentials;
use std::time::Duration;

/// Public market data endpoint
pub const DEFAULT_PUBLIC_URL: &str = "https://poloniex.com/public";
/// Authenticated trading endpoint
pub const DEFAULT_TRADING_URL: &str = "https://poloniex.com/tradingApi";

/// Timeout for public GET requests
const DEFAULT_PUBLIC_TIMEOUT_SECS: u64 = 10;
/// Timeout for authenticated POST requests
const DEFAULT_TRADING_TIMEOUT_SECS: u64 = 30;
/// Minimum spacing between authenticated requests
const DEFAULT_MIN_REQUEST_INTERVAL_MS: u64 = 200;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Public endpoint URL
    pub public_url: String,
    /// Trading endpoint URL
    pub trading_url: String,
    /// Public request timeout in seconds
    pub public_timeout_secs: u64,
    /// Trading request timeout in seconds
    pub trading_timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Minimum time between two authenticated requests of one executor
    pub min_request_interval: Duration,
    /// Skip TLS certificate verification (testing only)
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            trading_url: DEFAULT_TRADING_URL.to_string(),
            public_timeout_secs: DEFAULT_PUBLIC_TIMEOUT_SECS,
            trading_timeout_secs: DEFAULT_TRADING_TIMEOUT_SECS,
            user_agent: None,
            min_request_interval: Duration::from_millis(DEFAULT_MIN_REQUEST_INTERVAL_MS),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the public endpoint URL
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = url.into();
        self
    }

    /// Set the trading endpoint URL
    pub fn with_trading_url(mut self, url: impl Into<String>) -> Self {
        self.trading_url = url.into();
        self
    }

    /// Set the public request timeout
    pub fn with_public_timeout(mut self, secs: u64) -> Self {
        self.public_timeout_secs = secs;
        self
    }

    /// Set the trading request timeout
    pub fn with_trading_timeout(mut self, secs: u64) -> Self {
        self.trading_timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the minimum spacing between authenticated requests
    pub fn with_min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }

    /// Disable TLS certificate verification
    ///
    /// Only meant for local test servers with self-signed certificates.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// User agent sent with every request
    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(concat!("poloniex-rest/", env!("CARGO_PKG_VERSION")))
    }

    /// Public request timeout
    pub fn public_timeout(&self) -> Duration {
        Duration::from_secs(self.public_timeout_secs)
    }

    /// Trading request timeout
    pub fn trading_timeout(&self) -> Duration {
        Duration::from_secs(self.trading_timeout_secs)
    }
}

//! Client Builder Pattern
//!
//! # Example
//!
//! ```no_run
//! use poloniex_sdk::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Poloniex::builder()
//!     .credentials(Credentials::from_env()?)
//!     .config(ClientConfig::new().with_trading_timeout(60))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use poloniex_auth::Credentials;
use poloniex_rest::{ClientConfig, HttpTransport, PublicClient, RestResult, TradingClient, Transport};
use std::sync::Arc;
use tracing::debug;

use crate::client::Poloniex;

/// Builder for configuring a [`Poloniex`] client
#[derive(Default)]
pub struct PoloniexBuilder {
    credentials: Option<Credentials>,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl PoloniexBuilder {
    /// Create a builder with the default configuration and no credentials
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the trading API with these credentials
    ///
    /// Takes precedence over credentials carried by [`config`](Self::config).
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Load credentials from `POLONIEX_API_KEY` / `POLONIEX_API_SECRET`
    pub fn credentials_from_env(self) -> RestResult<Self> {
        Ok(self.credentials(Credentials::from_env()?))
    }

    /// Replace the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this transport instead of opening an HTTP client
    ///
    /// The transport is shared by the public and trading clients.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    ///
    /// Fails only when the HTTP transport cannot be constructed.
    pub fn build(self) -> RestResult<Poloniex> {
        let Self {
            credentials,
            config,
            transport,
        } = self;

        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(&config)?),
        };

        let public = PublicClient::new(transport.clone(), &config);
        let trading = credentials
            .or_else(|| config.credentials.clone())
            .map(|credentials| TradingClient::new(credentials, transport, &config));

        debug!(authenticated = trading.is_some(), "Built Poloniex client");
        Ok(Poloniex::from_parts(public, trading))
    }
}

impl std::fmt::Debug for PoloniexBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoloniexBuilder")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

//! Authenticated trading client

use poloniex_auth::Credentials;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::config::ClientConfig;
use crate::endpoints::{AccountEndpoints, LendingEndpoints, MarginEndpoints, OrderEndpoints};
use crate::error::{RestError, RestResult};
use crate::executor::RequestExecutor;
use crate::params::Params;
use crate::transport::{HttpTransport, Transport};

/// Poloniex trading API client
///
/// Groups the authenticated commands by area. All groups share one
/// [`RequestExecutor`], so they share its nonce sequence and pacing.
///
/// # Example
///
/// ```no_run
/// use poloniex_auth::Credentials;
/// use poloniex_rest::{ClientConfig, TradingClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::new().with_credentials(Credentials::from_env()?);
///     let client = TradingClient::from_config(&config)?;
///
///     let balances = client.account().balances().await?;
///     println!("BTC: {}", balances["BTC"]);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TradingClient {
    executor: Arc<RequestExecutor>,
}

impl TradingClient {
    /// Create a client over an existing transport
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        info!(api_key = %redact(credentials.api_key()), "Created Poloniex trading client");
        Self {
            executor: Arc::new(RequestExecutor::new(credentials, transport, config)),
        }
    }

    /// Create a client with its own HTTP transport
    ///
    /// Fails with [`RestError::AuthRequired`] when the configuration has no
    /// credentials.
    pub fn from_config(config: &ClientConfig) -> RestResult<Self> {
        let credentials = config.credentials.clone().ok_or(RestError::AuthRequired)?;
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(credentials, Arc::new(transport), config))
    }

    /// The underlying executor
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Run any authenticated command by name
    pub async fn execute(&self, command: &str, params: Params) -> RestResult<Value> {
        self.executor.execute(command, params).await
    }

    /// Balance, address, withdrawal and transfer endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.executor)
    }

    /// Order placement and history endpoints
    pub fn orders(&self) -> OrderEndpoints<'_> {
        OrderEndpoints::new(&self.executor)
    }

    /// Margin trading endpoints
    pub fn margin(&self) -> MarginEndpoints<'_> {
        MarginEndpoints::new(&self.executor)
    }

    /// Lending endpoints
    pub fn lending(&self) -> LendingEndpoints<'_> {
        LendingEndpoints::new(&self.executor)
    }
}

impl std::fmt::Debug for TradingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradingClient")
            .field("executor", &self.executor)
            .finish()
    }
}

fn redact(api_key: &str) -> String {
    let visible: String = api_key.chars().take(8).collect();
    format!("{}...", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_credentials() {
        let result = TradingClient::from_config(&ClientConfig::default());
        assert!(matches!(result, Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_from_config_with_credentials() {
        let creds = Credentials::new("key-123456789", "secret").unwrap();
        let client = TradingClient::from_config(&ClientConfig::new().with_credentials(creds)).unwrap();
        assert_eq!(client.executor().api_key(), "key-123456789");
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact("ABCDEFGHIJKL"), "ABCDEFGH...");
        assert_eq!(redact("AB"), "AB...");
    }
}

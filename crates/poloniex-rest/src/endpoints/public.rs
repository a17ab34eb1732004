//! Public market data endpoints
//!
//! These endpoints don't require authentication. Requests are plain GETs
//! against the public URL with the command and its parameters in the query.

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::RestResult;
use crate::params::Params;
use crate::response;
use crate::transport::{HttpTransport, Transport};
use crate::types::{ChartPeriod, Command};

/// Public market data client
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct PublicClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl PublicClient {
    /// Create a client over an existing transport
    pub fn new(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            transport,
            base_url: config.public_url.clone(),
        }
    }

    /// Create a client with its own HTTP transport
    pub fn from_config(config: &ClientConfig) -> RestResult<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), config))
    }

    /// Build the request URL for a command
    pub fn url(&self, command: Command, params: Params) -> RestResult<String> {
        let mut query = Params::new().with("command", command.as_str());
        query.extend(params);
        Ok(format!("{}?{}", self.base_url, query.encode()?))
    }

    async fn get(&self, command: Command, params: Params) -> RestResult<Value> {
        let url = self.url(command, params)?;
        debug!(%url, "Fetching public data");

        let raw = self.transport.get_public(&url).await?;
        response::decode(&raw)
    }

    /// Get the ticker for all markets
    #[instrument(skip(self))]
    pub async fn ticker(&self) -> RestResult<Value> {
        self.get(Command::ReturnTicker, Params::new()).await
    }

    /// Get the 24-hour volume for all markets plus totals per primary currency
    #[instrument(skip(self))]
    pub async fn volume_24h(&self) -> RestResult<Value> {
        self.get(Command::Return24hVolume, Params::new()).await
    }

    /// Get the order book for a market
    ///
    /// # Arguments
    /// * `pair` - Currency pair (e.g., "BTC_NXT"), or "all" for every market
    /// * `depth` - Number of levels per side
    #[instrument(skip(self))]
    pub async fn order_book(&self, pair: &str, depth: Option<u32>) -> RestResult<Value> {
        let params = Params::new()
            .with("currencyPair", pair)
            .with_opt("depth", depth.filter(|d| *d > 0));
        self.get(Command::ReturnOrderBook, params).await
    }

    /// Get trades for a market between two unix timestamps
    #[instrument(skip(self))]
    pub async fn trade_history(&self, pair: &str, start: u64, end: u64) -> RestResult<Value> {
        let params = Params::new()
            .with("currencyPair", pair)
            .with("start", start)
            .with("end", end);
        self.get(Command::ReturnPublicTradeHistory, params).await
    }

    /// Get trades for a market over the last `period_secs` seconds
    #[instrument(skip(self))]
    pub async fn last_trade_history(&self, pair: &str, period_secs: u64) -> RestResult<Value> {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        self.trade_history(pair, now.saturating_sub(period_secs), now)
            .await
    }

    /// Get candlestick data between two unix timestamps
    #[instrument(skip(self))]
    pub async fn chart_data(
        &self,
        pair: &str,
        period: ChartPeriod,
        start: u64,
        end: u64,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("currencyPair", pair)
            .with("start", start)
            .with("end", end)
            .with("period", period.as_secs());
        self.get(Command::ReturnChartData, params).await
    }

    /// Get information about all currencies
    #[instrument(skip(self))]
    pub async fn currencies(&self) -> RestResult<Value> {
        self.get(Command::ReturnCurrencies, Params::new()).await
    }

    /// Get loan offers and demands, optionally for one currency
    #[instrument(skip(self))]
    pub async fn loan_orders(&self, currency: Option<&str>) -> RestResult<Value> {
        let params = Params::new().with_opt("currency", currency.filter(|c| !c.is_empty()));
        self.get(Command::ReturnLoanOrders, params).await
    }
}

impl std::fmt::Debug for PublicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

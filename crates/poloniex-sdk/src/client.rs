//! Main Poloniex client

use parking_lot::Mutex;
use poloniex_rest::{Account, PublicClient, RestError, RestResult, TradingClient};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::builder::PoloniexBuilder;
use crate::rates::{self, BTC_USD_PAIR};

/// Last fetched account snapshots
#[derive(Debug, Default)]
struct Snapshots {
    balances: Option<Value>,
    complete_balances: Option<(Option<Account>, Value)>,
    deposit_addresses: Option<Value>,
}

/// High-level Poloniex client
///
/// Combines the public market data client with an optional trading client,
/// and adds cached account reads plus derived BTC/USD rates.
///
/// # Example
///
/// ```no_run
/// use poloniex_sdk::prelude::*;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Poloniex::builder().build()?;
///
///     if let Some(rate) = client.ticker_btc_rate().await? {
///         println!("BTC/USD: {}", rate);
///     }
///     Ok(())
/// }
/// ```
pub struct Poloniex {
    public: PublicClient,
    trading: Option<TradingClient>,
    snapshots: Mutex<Snapshots>,
}

impl Poloniex {
    /// Create a new builder
    pub fn builder() -> PoloniexBuilder {
        PoloniexBuilder::new()
    }

    pub(crate) fn from_parts(public: PublicClient, trading: Option<TradingClient>) -> Self {
        Self {
            public,
            trading,
            snapshots: Mutex::new(Snapshots::default()),
        }
    }

    /// Public market data endpoints
    pub fn public(&self) -> &PublicClient {
        &self.public
    }

    /// Authenticated endpoints
    ///
    /// Fails with [`RestError::AuthRequired`] when built without credentials.
    pub fn trading(&self) -> RestResult<&TradingClient> {
        self.trading.as_ref().ok_or(RestError::AuthRequired)
    }

    /// Check if the trading API is available
    pub fn is_authenticated(&self) -> bool {
        self.trading.is_some()
    }

    // ========== Cached account reads ==========

    /// Exchange account balances
    ///
    /// Served from the last fetched value unless `reload` is set.
    #[instrument(skip(self))]
    pub async fn balances(&self, reload: bool) -> RestResult<Value> {
        if !reload {
            let cached = self.snapshots.lock().balances.clone();
            if let Some(cached) = cached {
                debug!("Using cached balances");
                return Ok(cached);
            }
        }

        let fresh = self.trading()?.account().balances().await?;
        self.snapshots.lock().balances = Some(fresh.clone());
        Ok(fresh)
    }

    /// Complete balances for an account scope
    ///
    /// A cached value is only reused for the same `account` it was fetched
    /// with.
    #[instrument(skip(self))]
    pub async fn complete_balances(&self, account: Option<Account>, reload: bool) -> RestResult<Value> {
        if !reload {
            let cached = self
                .snapshots
                .lock()
                .complete_balances
                .clone()
                .filter(|(scope, _)| *scope == account);
            if let Some((_, cached)) = cached {
                debug!("Using cached complete balances");
                return Ok(cached);
            }
        }

        let fresh = self.trading()?.account().complete_balances(account).await?;
        self.snapshots.lock().complete_balances = Some((account, fresh.clone()));
        Ok(fresh)
    }

    /// Deposit addresses per currency
    #[instrument(skip(self))]
    pub async fn deposit_addresses(&self, reload: bool) -> RestResult<Value> {
        if !reload {
            let cached = self.snapshots.lock().deposit_addresses.clone();
            if let Some(cached) = cached {
                debug!("Using cached deposit addresses");
                return Ok(cached);
            }
        }

        let fresh = self.trading()?.account().deposit_addresses().await?;
        self.snapshots.lock().deposit_addresses = Some(fresh.clone());
        Ok(fresh)
    }

    // ========== Open orders ==========

    /// Open orders in every market that has any
    ///
    /// Markets with no open orders are left out.
    #[instrument(skip(self))]
    pub async fn open_orders(&self) -> RestResult<BTreeMap<String, Vec<Value>>> {
        let response = self.trading()?.orders().open_orders("all").await?;
        let markets = response.as_object().ok_or_else(|| {
            RestError::EmptyResponse(format!("expected open orders per market, got {}", response))
        })?;

        Ok(markets
            .iter()
            .filter_map(|(pair, orders)| match orders.as_array() {
                Some(list) if !list.is_empty() => Some((pair.clone(), list.clone())),
                _ => None,
            })
            .collect())
    }

    /// Open orders in one market
    ///
    /// Returns an empty list when the market has none.
    #[instrument(skip(self))]
    pub async fn open_orders_for(&self, pair: &str) -> RestResult<Vec<Value>> {
        let pair = pair.trim().to_uppercase();
        let mut markets = self.open_orders().await?;
        Ok(markets.remove(&pair).unwrap_or_default())
    }

    // ========== Derived rates ==========

    /// BTC/USD rate from the last `USDT_BTC` trade in the ticker
    ///
    /// `None` when the ticker has no usable `USDT_BTC` entry.
    #[instrument(skip(self))]
    pub async fn ticker_btc_rate(&self) -> RestResult<Option<Decimal>> {
        let ticker = self.public.ticker().await?;
        Ok(rates::ticker_rate(&ticker, BTC_USD_PAIR))
    }

    /// BTC/USD rate estimated as the mean price of the `USDT_BTC` order book
    ///
    /// Zero when the book is empty.
    #[instrument(skip(self))]
    pub async fn estimated_btc_rate(&self) -> RestResult<Decimal> {
        let book = self.public.order_book(BTC_USD_PAIR, None).await?;
        let rate = rates::estimate_rate(&book);
        debug!(%rate, "Estimated BTC rate from order book");
        Ok(rate)
    }
}

impl std::fmt::Debug for Poloniex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poloniex")
            .field("public", &self.public)
            .field("trading", &self.trading)
            .finish()
    }
}

//! Private order endpoints
//!
//! Placing, moving and cancelling exchange orders, plus order and trade
//! history. These endpoints require authentication.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::instrument;

use crate::error::RestResult;
use crate::executor::RequestExecutor;
use crate::params::Params;
use crate::types::{normalize_pair, Command, MoveOrderOptions, OrderOptions};

/// Private order endpoints
pub struct OrderEndpoints<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> OrderEndpoints<'a> {
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Get open orders for a market, or "all" for every market
    ///
    /// The pair is passed through unchanged.
    #[instrument(skip(self))]
    pub async fn open_orders(&self, pair: &str) -> RestResult<Value> {
        let params = Params::new().with("currencyPair", pair);
        self.executor
            .execute_command(Command::ReturnOpenOrders, params)
            .await
    }

    /// Get your trade history
    ///
    /// # Arguments
    /// * `pair` - Currency pair, or "all"
    /// * `start` / `end` - Unix range; only sent when both are given and
    ///   `end > start`. Without a range the exchange returns one day.
    #[instrument(skip(self))]
    pub async fn trade_history(
        &self,
        pair: &str,
        start: Option<u64>,
        end: Option<u64>,
    ) -> RestResult<Value> {
        let mut params = Params::new().with("currencyPair", normalize_pair(pair));

        if let (Some(start), Some(end)) = (start, end) {
            if end > start {
                params.insert("start", start);
                params.insert("end", end);
            }
        }

        self.executor
            .execute_command(Command::ReturnTradeHistory, params)
            .await
    }

    /// Get all trades involving an order
    #[instrument(skip(self))]
    pub async fn order_trades(&self, order_number: &str) -> RestResult<Value> {
        let params = Params::new().with("orderNumber", order_number);
        self.executor
            .execute_command(Command::ReturnOrderTrades, params)
            .await
    }

    /// Place a limit buy order
    #[instrument(skip(self))]
    pub async fn buy(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        options: OrderOptions,
    ) -> RestResult<Value> {
        self.place(Command::Buy, pair, rate, amount, options).await
    }

    /// Place a limit sell order
    #[instrument(skip(self))]
    pub async fn sell(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        options: OrderOptions,
    ) -> RestResult<Value> {
        self.place(Command::Sell, pair, rate, amount, options).await
    }

    async fn place(
        &self,
        command: Command,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        options: OrderOptions,
    ) -> RestResult<Value> {
        let mut params = Params::new()
            .with("currencyPair", normalize_pair(pair))
            .with("rate", rate)
            .with("amount", amount);
        options.apply(&mut params);

        self.executor.execute_command(command, params).await
    }

    /// Cancel an order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_number: &str) -> RestResult<Value> {
        let params = Params::new().with("orderNumber", order_number);
        self.executor
            .execute_command(Command::CancelOrder, params)
            .await
    }

    /// Atomically cancel an order and place a new one of the same type
    ///
    /// `amount` is only sent when positive; otherwise the original amount is
    /// kept.
    #[instrument(skip(self))]
    pub async fn move_order(
        &self,
        order_number: &str,
        rate: Decimal,
        amount: Option<Decimal>,
        options: MoveOrderOptions,
    ) -> RestResult<Value> {
        let mut params = Params::new()
            .with("orderNumber", order_number)
            .with("rate", rate)
            .with_opt("amount", amount.filter(|a| *a > Decimal::ZERO));
        options.apply(&mut params);

        self.executor
            .execute_command(Command::MoveOrder, params)
            .await
    }
}

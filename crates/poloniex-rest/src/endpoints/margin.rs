//! Private margin trading endpoints

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::instrument;

use crate::error::RestResult;
use crate::executor::RequestExecutor;
use crate::params::Params;
use crate::types::{normalize_pair, Command};

/// Private margin trading endpoints
pub struct MarginEndpoints<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> MarginEndpoints<'a> {
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Get a summary of the whole margin account
    #[instrument(skip(self))]
    pub async fn account_summary(&self) -> RestResult<Value> {
        self.executor
            .execute_command(Command::ReturnMarginAccountSummary, Params::new())
            .await
    }

    /// Place a margin buy order
    ///
    /// `lending_rate` caps the lending rate and is only sent when positive.
    #[instrument(skip(self))]
    pub async fn buy(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> RestResult<Value> {
        self.place(Command::MarginBuy, pair, rate, amount, lending_rate)
            .await
    }

    /// Place a margin sell order
    #[instrument(skip(self))]
    pub async fn sell(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> RestResult<Value> {
        self.place(Command::MarginSell, pair, rate, amount, lending_rate)
            .await
    }

    async fn place(
        &self,
        command: Command,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("currencyPair", normalize_pair(pair))
            .with("rate", rate)
            .with("amount", amount)
            .with_opt("lendingRate", lending_rate.filter(|r| *r > Decimal::ZERO));

        self.executor.execute_command(command, params).await
    }

    /// Get the margin position in a market, or "all"
    ///
    /// With no position, `type` is `"none"`; with no liquidation price,
    /// `liquidationPrice` is `-1`.
    #[instrument(skip(self))]
    pub async fn position(&self, pair: &str) -> RestResult<Value> {
        let params = Params::new().with("currencyPair", normalize_pair(pair));
        self.executor
            .execute_command(Command::GetMarginPosition, params)
            .await
    }

    /// Close the margin position in a market with a market order
    #[instrument(skip(self))]
    pub async fn close_position(&self, pair: &str) -> RestResult<Value> {
        let params = Params::new().with("currencyPair", normalize_pair(pair));
        self.executor
            .execute_command(Command::CloseMarginPosition, params)
            .await
    }
}

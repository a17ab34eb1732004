//! Private lending endpoints

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::instrument;

use crate::error::RestResult;
use crate::executor::RequestExecutor;
use crate::params::Params;
use crate::types::{normalize_currency, Command};

/// Private lending endpoints
pub struct LendingEndpoints<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> LendingEndpoints<'a> {
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Offer a loan
    ///
    /// # Arguments
    /// * `currency` - Currency to lend
    /// * `amount` - Amount offered
    /// * `duration_days` - Loan duration in days
    /// * `auto_renew` - Renew automatically when the loan ends
    /// * `lending_rate` - Daily interest rate
    #[instrument(skip(self))]
    pub async fn create_loan_offer(
        &self,
        currency: &str,
        amount: Decimal,
        duration_days: u32,
        auto_renew: bool,
        lending_rate: Decimal,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("currency", normalize_currency(currency))
            .with("amount", amount)
            .with("duration", duration_days)
            .with("autoRenew", auto_renew)
            .with("lendingRate", lending_rate);
        self.executor
            .execute_command(Command::CreateLoanOffer, params)
            .await
    }

    /// Cancel a loan offer
    #[instrument(skip(self))]
    pub async fn cancel_loan_offer(&self, order_number: &str) -> RestResult<Value> {
        let params = Params::new().with("orderNumber", order_number);
        self.executor
            .execute_command(Command::CancelLoanOffer, params)
            .await
    }

    /// Get open loan offers per currency
    #[instrument(skip(self))]
    pub async fn open_loan_offers(&self) -> RestResult<Value> {
        self.executor
            .execute_command(Command::ReturnOpenLoanOffers, Params::new())
            .await
    }

    /// Get active loans per currency
    #[instrument(skip(self))]
    pub async fn active_loans(&self) -> RestResult<Value> {
        self.executor
            .execute_command(Command::ReturnActiveLoans, Params::new())
            .await
    }

    /// Get lending history between two unix timestamps
    ///
    /// `limit` caps the number of rows and is only sent when positive.
    #[instrument(skip(self))]
    pub async fn lending_history(
        &self,
        start: u64,
        end: u64,
        limit: Option<u32>,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("start", start)
            .with("end", end)
            .with_opt("limit", limit.filter(|l| *l > 0));
        self.executor
            .execute_command(Command::ReturnLendingHistory, params)
            .await
    }

    /// Toggle auto-renew on an active loan
    #[instrument(skip(self))]
    pub async fn toggle_auto_renew(&self, order_number: &str) -> RestResult<Value> {
        let params = Params::new().with("orderNumber", order_number);
        self.executor
            .execute_command(Command::ToggleAutoRenew, params)
            .await
    }
}

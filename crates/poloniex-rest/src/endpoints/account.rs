//! Private account endpoints
//!
//! Balances, deposit addresses, withdrawals and transfers between accounts.
//! These endpoints require authentication.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::instrument;

use crate::error::{RestError, RestResult};
use crate::executor::RequestExecutor;
use crate::params::Params;
use crate::types::{normalize_currency, Account, Command};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Get available balances of the exchange account
    #[instrument(skip(self))]
    pub async fn balances(&self) -> RestResult<Value> {
        self.executor
            .execute_command(Command::ReturnBalances, Params::new())
            .await
    }

    /// Get available, on-order and BTC-valued balances
    ///
    /// # Arguments
    /// * `account` - Scope; `Account::All` includes margin and lending.
    ///   Defaults to the exchange account when `None`.
    #[instrument(skip(self))]
    pub async fn complete_balances(&self, account: Option<Account>) -> RestResult<Value> {
        let params = Params::new().with_opt("account", account.map(|a| a.as_str()));
        self.executor
            .execute_command(Command::ReturnCompleteBalances, params)
            .await
    }

    /// Get all deposit addresses
    #[instrument(skip(self))]
    pub async fn deposit_addresses(&self) -> RestResult<Value> {
        self.executor
            .execute_command(Command::ReturnDepositAddresses, Params::new())
            .await
    }

    /// Generate a new deposit address for a currency
    ///
    /// The exchange allows one new address per currency per day, and only
    /// once the previous one has been used.
    #[instrument(skip(self))]
    pub async fn generate_new_address(&self, currency: &str) -> RestResult<Value> {
        let params = Params::new().with("currency", normalize_currency(currency));
        self.executor
            .execute_command(Command::GenerateNewAddress, params)
            .await
    }

    /// Get deposit and withdrawal history between two unix timestamps
    #[instrument(skip(self))]
    pub async fn deposits_withdrawals(&self, start: u64, end: u64) -> RestResult<Value> {
        let params = Params::new().with("start", start).with("end", end);
        self.executor
            .execute_command(Command::ReturnDepositsWithdrawals, params)
            .await
    }

    /// Withdraw funds to an external address, without email confirmation
    ///
    /// # Arguments
    /// * `currency` - Currency code
    /// * `amount` - Amount to withdraw
    /// * `address` - Destination address
    /// * `payment_id` - Payment ID, only sent for XMR
    #[instrument(skip(self, address, payment_id))]
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> RestResult<Value> {
        let currency = normalize_currency(currency);
        let payment_id = payment_id.filter(|id| currency == "XMR" && !id.is_empty());

        let params = Params::new()
            .with("currency", currency)
            .with("amount", amount)
            .with("address", address)
            .with_opt("paymentId", payment_id);
        self.executor
            .execute_command(Command::Withdraw, params)
            .await
    }

    /// Get maker/taker fees and trailing 30-day BTC volume
    #[instrument(skip(self))]
    pub async fn fee_info(&self) -> RestResult<Value> {
        self.executor
            .execute_command(Command::ReturnFeeInfo, Params::new())
            .await
    }

    /// Get balances sorted by account
    ///
    /// `account` restricts the result to one account; `Account::All` is not
    /// accepted by this command.
    #[instrument(skip(self))]
    pub async fn available_account_balances(&self, account: Option<Account>) -> RestResult<Value> {
        if let Some(Account::All) = account {
            return Err(RestError::Validation(
                "Invalid 'account' parameter: \"all\" (expected exchange, margin or lending)"
                    .to_string(),
            ));
        }

        let params = Params::new().with_opt("account", account.map(|a| a.as_str()));
        self.executor
            .execute_command(Command::ReturnAvailableAccountBalances, params)
            .await
    }

    /// Get tradable balances for every margin-enabled market
    #[instrument(skip(self))]
    pub async fn tradable_balances(&self) -> RestResult<Value> {
        self.executor
            .execute_command(Command::ReturnTradableBalances, Params::new())
            .await
    }

    /// Move funds between accounts
    ///
    /// `from_account` and `to_account` must each be `exchange`, `margin` or
    /// `lending`; anything else fails before a request is made.
    #[instrument(skip(self))]
    pub async fn transfer_balance(
        &self,
        currency: &str,
        amount: Decimal,
        from_account: &str,
        to_account: &str,
    ) -> RestResult<Value> {
        let from = Account::parse_transferable(from_account, "fromAccount")?;
        let to = Account::parse_transferable(to_account, "toAccount")?;

        let params = Params::new()
            .with("currency", normalize_currency(currency))
            .with("amount", amount)
            .with("fromAccount", from.as_str())
            .with("toAccount", to.as_str());
        self.executor
            .execute_command(Command::TransferBalance, params)
            .await
    }
}

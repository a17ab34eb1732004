//! Types for Poloniex API requests

use std::fmt;
use std::str::FromStr;

use crate::error::RestError;
use crate::params::Params;

// ============================================================================
// Commands
// ============================================================================

/// Every command name understood by the exchange
///
/// Wire names are case-sensitive; see [`Command::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Public
    ReturnTicker,
    Return24hVolume,
    ReturnOrderBook,
    ReturnPublicTradeHistory,
    ReturnChartData,
    ReturnCurrencies,
    ReturnLoanOrders,
    // Account
    ReturnBalances,
    ReturnCompleteBalances,
    ReturnDepositAddresses,
    GenerateNewAddress,
    ReturnDepositsWithdrawals,
    Withdraw,
    ReturnFeeInfo,
    ReturnAvailableAccountBalances,
    ReturnTradableBalances,
    TransferBalance,
    // Orders
    ReturnOpenOrders,
    ReturnTradeHistory,
    ReturnOrderTrades,
    Buy,
    Sell,
    CancelOrder,
    MoveOrder,
    // Margin
    ReturnMarginAccountSummary,
    MarginBuy,
    MarginSell,
    GetMarginPosition,
    CloseMarginPosition,
    // Lending
    CreateLoanOffer,
    CancelLoanOffer,
    ReturnOpenLoanOffers,
    ReturnActiveLoans,
    ReturnLendingHistory,
    ToggleAutoRenew,
}

impl Command {
    /// Wire name sent as the `command` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReturnTicker => "returnTicker",
            Self::Return24hVolume => "return24hVolume",
            Self::ReturnOrderBook => "returnOrderBook",
            // Public and private trade history share a name on different endpoints
            Self::ReturnPublicTradeHistory | Self::ReturnTradeHistory => "returnTradeHistory",
            Self::ReturnChartData => "returnChartData",
            Self::ReturnCurrencies => "returnCurrencies",
            Self::ReturnLoanOrders => "returnLoanOrders",
            Self::ReturnBalances => "returnBalances",
            Self::ReturnCompleteBalances => "returnCompleteBalances",
            Self::ReturnDepositAddresses => "returnDepositAddresses",
            Self::GenerateNewAddress => "generateNewAddress",
            Self::ReturnDepositsWithdrawals => "returnDepositsWithdrawals",
            Self::Withdraw => "withdraw",
            Self::ReturnFeeInfo => "returnFeeInfo",
            Self::ReturnAvailableAccountBalances => "returnAvailableAccountBalances",
            Self::ReturnTradableBalances => "returnTradableBalances",
            Self::TransferBalance => "transferBalance",
            Self::ReturnOpenOrders => "returnOpenOrders",
            Self::ReturnOrderTrades => "returnOrderTrades",
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::CancelOrder => "cancelOrder",
            Self::MoveOrder => "moveOrder",
            Self::ReturnMarginAccountSummary => "returnMarginAccountSummary",
            Self::MarginBuy => "marginBuy",
            Self::MarginSell => "marginSell",
            Self::GetMarginPosition => "getMarginPosition",
            Self::CloseMarginPosition => "closeMarginPosition",
            Self::CreateLoanOffer => "createLoanOffer",
            Self::CancelLoanOffer => "cancelLoanOffer",
            Self::ReturnOpenLoanOffers => "returnOpenLoanOffers",
            Self::ReturnActiveLoans => "returnActiveLoans",
            Self::ReturnLendingHistory => "returnLendingHistory",
            Self::ToggleAutoRenew => "toggleAutoRenew",
        }
    }

    /// Check if the command goes to the public endpoint
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Self::ReturnTicker
                | Self::Return24hVolume
                | Self::ReturnOrderBook
                | Self::ReturnPublicTradeHistory
                | Self::ReturnChartData
                | Self::ReturnCurrencies
                | Self::ReturnLoanOrders
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Accounts
// ============================================================================

/// Account scope for balance and transfer commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Account {
    Exchange,
    Margin,
    Lending,
    /// Every account; only accepted by complete balances
    All,
}

impl Account {
    /// Accounts that hold funds and can be transferred between
    pub const TRANSFERABLE: [Account; 3] = [Account::Exchange, Account::Margin, Account::Lending];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exchange => "exchange",
            Self::Margin => "margin",
            Self::Lending => "lending",
            Self::All => "all",
        }
    }

    /// Check if this names a single account
    pub fn is_transferable(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Parse an account name that must denote a single account
    pub fn parse_transferable(name: &str, field: &str) -> Result<Self, RestError> {
        match name.parse::<Account>() {
            Ok(account) if account.is_transferable() => Ok(account),
            _ => Err(RestError::Validation(format!(
                "Invalid '{}' parameter: {:?} (expected exchange, margin or lending)",
                field, name
            ))),
        }
    }
}

impl FromStr for Account {
    type Err = RestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exchange" => Ok(Self::Exchange),
            "margin" => Ok(Self::Margin),
            "lending" => Ok(Self::Lending),
            "all" => Ok(Self::All),
            other => Err(RestError::Validation(format!("Unknown account: {:?}", other))),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Market data
// ============================================================================

/// Candlestick period accepted by `returnChartData`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPeriod {
    M5,
    M15,
    M30,
    H2,
    H4,
    D1,
}

impl ChartPeriod {
    /// Period length in seconds
    pub fn as_secs(&self) -> u32 {
        match self {
            Self::M5 => 300,
            Self::M15 => 900,
            Self::M30 => 1800,
            Self::H2 => 7200,
            Self::H4 => 14400,
            Self::D1 => 86400,
        }
    }

    /// Look up a period by its length in seconds
    pub fn from_secs(secs: u32) -> Result<Self, RestError> {
        match secs {
            300 => Ok(Self::M5),
            900 => Ok(Self::M15),
            1800 => Ok(Self::M30),
            7200 => Ok(Self::H2),
            14400 => Ok(Self::H4),
            86400 => Ok(Self::D1),
            other => Err(RestError::Validation(format!(
                "Invalid candlestick period: {} (expected 300, 900, 1800, 7200, 14400 or 86400)",
                other
            ))),
        }
    }
}

/// Normalize a `QUOTE_BASE` currency pair for trading commands
pub fn normalize_pair(pair: &str) -> String {
    pair.trim().to_uppercase()
}

/// Normalize a currency code
pub fn normalize_currency(currency: &str) -> String {
    currency.trim().to_uppercase()
}

// ============================================================================
// Order options
// ============================================================================

/// Execution flags for `buy` and `sell`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderOptions {
    /// Fill entirely or abort
    pub fill_or_kill: bool,
    /// Cancel whatever does not fill immediately
    pub immediate_or_cancel: bool,
    /// Only place if no part fills immediately
    pub post_only: bool,
}

impl OrderOptions {
    pub fn fill_or_kill() -> Self {
        Self {
            fill_or_kill: true,
            ..Self::default()
        }
    }

    pub fn immediate_or_cancel() -> Self {
        Self {
            immediate_or_cancel: true,
            ..Self::default()
        }
    }

    pub fn post_only() -> Self {
        Self {
            post_only: true,
            ..Self::default()
        }
    }

    /// Append the set flags as `1`
    pub(crate) fn apply(&self, params: &mut Params) {
        if self.fill_or_kill {
            params.insert("fillOrKill", 1_i64);
        }
        if self.immediate_or_cancel {
            params.insert("immediateOrCancel", 1_i64);
        }
        if self.post_only {
            params.insert("postOnly", 1_i64);
        }
    }
}

/// Execution flags for `moveOrder`
///
/// Ignored by the exchange for margin orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOrderOptions {
    pub immediate_or_cancel: bool,
    pub post_only: bool,
}

impl MoveOrderOptions {
    pub(crate) fn apply(&self, params: &mut Params) {
        if self.immediate_or_cancel {
            params.insert("immediateOrCancel", 1_i64);
        }
        if self.post_only {
            params.insert("postOnly", 1_i64);
        }
    }
}

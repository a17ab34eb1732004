//! Re-exports for convenience
//!
//! Import everything you need with:
//! ```
//! use poloniex_sdk::prelude::*;
//! ```

// Client
pub use crate::builder::PoloniexBuilder;
pub use crate::client::Poloniex;
pub use crate::rates::{estimate_rate, ticker_rate, BTC_USD_PAIR};

// Credentials
pub use poloniex_auth::{AuthError, Credentials};

// REST types
pub use poloniex_rest::{
    Account, ChartPeriod, ClientConfig, Command, MoveOrderOptions, OrderOptions, Params,
    PublicClient, RestError, RestResult, TradingClient,
    // Transport seam
    AuthHeaders, HttpTransport, Transport, TransportError,
};

// Decimal for prices/amounts
pub use rust_decimal::Decimal;

// Raw JSON responses
pub use serde_json::Value;

//! REST API client for the Poloniex cryptocurrency exchange
//!
//! This crate provides the HTTP layer for Poloniex: public market data over
//! GET and signed trading commands over POST.
//!
//! # Features
//!
//! - **Market Data**: Ticker, 24h volume, order book, trades, candles, loan orders
//! - **Account**: Balances, deposit addresses, withdrawals, transfers
//! - **Trading**: Buy, sell, move and cancel orders
//! - **Margin & Lending**: Margin orders and positions, loan offers
//!
//! # Authentication
//!
//! Private commands are form-encoded POST bodies with a strictly increasing
//! `nonce`, signed with HMAC-SHA512 (hex) in the `Sign` header and the API key
//! in the `Key` header.
//!
//! # Example
//!
//! ```no_run
//! use poloniex_auth::Credentials;
//! use poloniex_rest::{ClientConfig, PublicClient, TradingClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let public = PublicClient::from_config(&ClientConfig::default())?;
//!     let ticker = public.ticker().await?;
//!     println!("USDT_BTC: {}", ticker["USDT_BTC"]["last"]);
//!
//!     // Private endpoints (auth required)
//!     let config = ClientConfig::new().with_credentials(Credentials::from_env()?);
//!     let trading = TradingClient::from_config(&config)?;
//!     let balances = trading.account().balances().await?;
//!     println!("Balances: {}", balances);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate Limiting
//!
//! Authenticated requests from one client are spaced at least
//! `ClientConfig::min_request_interval` apart (200ms by default). There is no
//! other rate limiting and no automatic retry.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod executor;
pub mod params;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::TradingClient;
pub use config::{ClientConfig, DEFAULT_PUBLIC_URL, DEFAULT_TRADING_URL};
pub use endpoints::PublicClient;
pub use error::{RestError, RestResult};
pub use executor::RequestExecutor;
pub use params::{ParamValue, Params};
pub use transport::{AuthHeaders, HttpTransport, Transport, TransportError};
pub use types::{Account, ChartPeriod, Command, MoveOrderOptions, OrderOptions};

pub use poloniex_auth::Credentials;

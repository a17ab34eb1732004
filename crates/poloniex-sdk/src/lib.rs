//! High-level SDK for the Poloniex REST API
//!
//! This crate wraps the public and trading clients from `poloniex-rest` in a
//! single [`Poloniex`] client that caches account snapshots and derives a
//! BTC/USD rate from market data.
//!
//! # Quick Start
//!
//! ```no_run
//! use poloniex_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Poloniex::builder().credentials_from_env()?.build()?;
//!
//!     // Market data
//!     println!("Estimated BTC/USD: {}", client.estimated_btc_rate().await?);
//!
//!     // Account data, fetched once and then served from cache
//!     let balances = client.balances(false).await?;
//!     println!("BTC balance: {}", balances["BTC"]);
//!
//!     for (pair, orders) in client.open_orders().await? {
//!         println!("{}: {} open orders", pair, orders.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **Single Entry Point**: Public and trading APIs behind one builder
//! - **Cached Reads**: Balances and deposit addresses with explicit reload
//! - **Derived Rates**: BTC/USD from the ticker or the order book
//! - **Injectable Transport**: Swap the HTTP layer for tests

pub mod builder;
pub mod client;
pub mod prelude;
pub mod rates;

// Re-export main types
pub use builder::PoloniexBuilder;
pub use client::Poloniex;

// Re-export commonly used types from dependencies
pub use poloniex_auth::Credentials;
pub use poloniex_rest::{Account, ClientConfig, RestError, RestResult};

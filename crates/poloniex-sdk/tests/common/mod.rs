//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes returned by the live Poloniex API.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use poloniex_sdk::prelude::*;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Ticker with a USDT_BTC entry
pub const TICKER: &str = r#"{
    "BTC_LTC": {"last": "0.0251", "lowestAsk": "0.02589999", "highestBid": "0.0251"},
    "USDT_BTC": {"last": "6000.5", "lowestAsk": "6001.0", "highestBid": "6000.0",
                 "percentChange": "0.0123", "isFrozen": "0"}
}"#;

/// Ticker without a USDT_BTC entry
pub const TICKER_WITHOUT_USDT_BTC: &str = r#"{
    "BTC_LTC": {"last": "0.0251"}
}"#;

/// Minimal USDT_BTC order book
pub const ORDER_BOOK: &str = r#"{"bids":[["100","1"],["200","1"]],"asks":[["300","1"]]}"#;

/// Frozen book with no levels
pub const FROZEN_ORDER_BOOK: &str = r#"{"asks":[],"bids":[],"isFrozen":"1","seq":18849}"#;

/// Book priced at the top of the decimal range
pub const EXTREME_ORDER_BOOK: &str = r#"{"asks":[["79228162514264337593543950335","1"],["79228162514264337593543950335","1"]],"bids":[]}"#;

/// Exchange balances
pub const BALANCES: &str = r#"{"BTC":"0.59098578","LTC":"3.31117268"}"#;

/// Balances after a trade
pub const BALANCES_UPDATED: &str = r#"{"BTC":"0.49098578","LTC":"7.31117268"}"#;

/// Complete balances
pub const COMPLETE_BALANCES: &str = r#"{
    "LTC": {"available": "5.015", "onOrders": "1.0025", "btcValue": "0.078"}
}"#;

/// Deposit addresses
pub const DEPOSIT_ADDRESSES: &str = r#"{"BTC":"19YqztHmspv2egyD6jQM3yn81x5t5krVdJ","LTC":"LPgf9kjv9H1Vuh4XSaKhzBe8JHdou1WgUB"}"#;

/// Open orders for "all" markets; only BTC_NXT has any
pub const OPEN_ORDERS: &str = r#"{
    "BTC_1CR": [],
    "BTC_AC": [],
    "BTC_NXT": [
        {"orderNumber": "120466", "type": "sell", "rate": "0.025", "amount": "100", "total": "2.5"},
        {"orderNumber": "120467", "type": "sell", "rate": "0.04", "amount": "100", "total": "4"}
    ]
}"#;

/// A call seen by the mock transport
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub body: Option<String>,
    pub at: Instant,
}

impl RecordedCall {
    /// The `command` parameter, from the query or the body
    pub fn command(&self) -> String {
        let encoded = match &self.body {
            Some(body) => body.as_str(),
            None => self.url.split_once('?').map(|(_, q)| q).unwrap_or_default(),
        };
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(encoded).unwrap();
        pairs
            .into_iter()
            .find(|(k, _)| k == "command")
            .map(|(_, v)| v)
            .unwrap_or_default()
    }
}

/// Transport returning queued bodies and recording every call
#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<VecDeque<String>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response body
    pub fn reply(&self, body: &str) {
        self.replies.lock().push_back(body.to_string());
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, url: &str, body: Option<&str>) -> String {
        self.calls.lock().push(RecordedCall {
            url: url.to_string(),
            body: body.map(str::to_string),
            at: Instant::now(),
        });
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| "{}".to_string())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_authenticated(
        &self,
        url: &str,
        body: &str,
        _headers: &AuthHeaders,
    ) -> Result<String, TransportError> {
        Ok(self.record(url, Some(body)))
    }

    async fn get_public(&self, url: &str) -> Result<String, TransportError> {
        Ok(self.record(url, None))
    }
}

/// Client without credentials over the mock
pub fn public_client(transport: &Arc<MockTransport>) -> Poloniex {
    Poloniex::builder()
        .transport(transport.clone())
        .build()
        .unwrap()
}

/// Authenticated client over the mock, with pacing disabled
pub fn trading_client(transport: &Arc<MockTransport>) -> Poloniex {
    trading_client_with_interval(transport, Duration::ZERO)
}

/// Authenticated client over the mock
pub fn trading_client_with_interval(transport: &Arc<MockTransport>, interval: Duration) -> Poloniex {
    Poloniex::builder()
        .credentials(Credentials::new("test-api-key", "test-api-secret").unwrap())
        .config(ClientConfig::new().with_min_request_interval(interval))
        .transport(transport.clone())
        .build()
        .unwrap()
}

//! Endpoint marshaling tests
//!
//! Drives the public and trading clients against a recording transport and
//! checks what would go over the wire.

use async_trait::async_trait;
use parking_lot::Mutex;
use poloniex_rest::{
    Account, AuthHeaders, ChartPeriod, ClientConfig, Credentials, MoveOrderOptions, OrderOptions,
    PublicClient, RestError, TradingClient, Transport, TransportError,
};
use rust_decimal_macros::dec;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// Recording transport
// =============================================================================

#[derive(Debug, Clone)]
enum Call {
    Post { url: String, body: String, sign: String },
    Get { url: String },
}

#[derive(Default)]
struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<Result<String, TransportError>>>,
}

impl RecordingTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn reply(&self, body: &str) {
        self.replies.lock().push_back(Ok(body.to_string()));
    }

    fn fail(&self, err: TransportError) {
        self.replies.lock().push_back(Err(err));
    }

    fn next_reply(&self) -> Result<String, TransportError> {
        self.replies.lock().pop_front().unwrap_or_else(|| Ok("{}".to_string()))
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Decoded body of the only POST made so far
    fn single_post(&self) -> Vec<(String, String)> {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        match &calls[0] {
            Call::Post { body, .. } => serde_urlencoded::from_str(body).unwrap(),
            other => panic!("expected POST, got {other:?}"),
        }
    }

    fn single_get(&self) -> String {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        match &calls[0] {
            Call::Get { url } => url.clone(),
            other => panic!("expected GET, got {other:?}"),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post_authenticated(
        &self,
        url: &str,
        body: &str,
        headers: &AuthHeaders,
    ) -> Result<String, TransportError> {
        self.calls.lock().push(Call::Post {
            url: url.to_string(),
            body: body.to_string(),
            sign: headers.sign.clone(),
        });
        self.next_reply()
    }

    async fn get_public(&self, url: &str) -> Result<String, TransportError> {
        self.calls.lock().push(Call::Get {
            url: url.to_string(),
        });
        self.next_reply()
    }
}

fn config() -> ClientConfig {
    ClientConfig::new().with_min_request_interval(Duration::ZERO)
}

fn trading(transport: &Arc<RecordingTransport>) -> TradingClient {
    let creds = Credentials::new("test-key", "test-secret").unwrap();
    TradingClient::new(creds, transport.clone(), &config())
}

fn public(transport: &Arc<RecordingTransport>) -> PublicClient {
    PublicClient::new(transport.clone(), &config())
}

/// Body pairs without the trailing nonce
fn without_nonce(mut pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    let (key, value) = pairs.pop().expect("body has a nonce");
    assert_eq!(key, "nonce");
    assert!(value.parse::<u64>().is_ok());
    pairs
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Public endpoints
// =============================================================================

#[tokio::test]
async fn test_public_ticker_request() {
    let transport = RecordingTransport::new();
    transport.reply(r#"{"USDT_BTC":{"last":"6000.5"}}"#);

    let ticker = public(&transport).ticker().await.unwrap();
    assert_eq!(ticker["USDT_BTC"]["last"], "6000.5");
    assert_eq!(
        transport.single_get(),
        "https://poloniex.com/public?command=returnTicker"
    );
}

#[tokio::test]
async fn test_public_order_book_depth_optional() {
    let transport = RecordingTransport::new();
    public(&transport).order_book("all", None).await.unwrap();
    assert_eq!(
        transport.single_get(),
        "https://poloniex.com/public?command=returnOrderBook&currencyPair=all"
    );

    let transport = RecordingTransport::new();
    public(&transport).order_book("BTC_NXT", Some(50)).await.unwrap();
    assert_eq!(
        transport.single_get(),
        "https://poloniex.com/public?command=returnOrderBook&currencyPair=BTC_NXT&depth=50"
    );
}

#[tokio::test]
async fn test_public_chart_data() {
    let transport = RecordingTransport::new();
    public(&transport)
        .chart_data("BTC_XMR", ChartPeriod::M30, 1405699200, 9999999999)
        .await
        .unwrap();
    assert_eq!(
        transport.single_get(),
        "https://poloniex.com/public?command=returnChartData&currencyPair=BTC_XMR\
         &start=1405699200&end=9999999999&period=1800"
    );
}

#[tokio::test]
async fn test_public_last_trade_history_window() {
    let transport = RecordingTransport::new();
    public(&transport)
        .last_trade_history("BTC_NXT", 3600)
        .await
        .unwrap();

    let url = transport.single_get();
    let query = url.split_once('?').unwrap().1;
    let decoded: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap();
    assert_eq!(decoded[0].1, "returnTradeHistory");
    let start: u64 = decoded[2].1.parse().unwrap();
    let end: u64 = decoded[3].1.parse().unwrap();
    assert_eq!(end - start, 3600);
}

#[tokio::test]
async fn test_public_loan_orders() {
    let transport = RecordingTransport::new();
    public(&transport).loan_orders(Some("BTC")).await.unwrap();
    assert_eq!(
        transport.single_get(),
        "https://poloniex.com/public?command=returnLoanOrders&currency=BTC"
    );

    let transport = RecordingTransport::new();
    public(&transport).loan_orders(None).await.unwrap();
    assert_eq!(
        transport.single_get(),
        "https://poloniex.com/public?command=returnLoanOrders"
    );
}

#[tokio::test]
async fn test_public_requests_carry_no_credentials() {
    let transport = RecordingTransport::new();
    let client = public(&transport);
    client.volume_24h().await.unwrap();
    client.currencies().await.unwrap();

    for call in transport.calls() {
        match call {
            Call::Get { url } => {
                assert!(!url.contains("nonce"));
                assert!(!url.contains("test-key"));
            }
            other => panic!("public client must only GET, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_public_api_error() {
    let transport = RecordingTransport::new();
    transport.reply(r#"{"error":"Invalid currency pair."}"#);

    let err = public(&transport).order_book("FOO_BAR", None).await.unwrap_err();
    assert_eq!(err.api_message(), Some("Invalid currency pair."));
}

#[tokio::test]
async fn test_public_transport_failure_surfaces() {
    let transport = RecordingTransport::new();
    transport.fail(TransportError::Timeout(Duration::from_secs(10)));

    let err = public(&transport).ticker().await.unwrap_err();
    assert!(matches!(err, RestError::Transport(TransportError::Timeout(_))));
    assert!(err.is_retryable());
}

// =============================================================================
// Account endpoints
// =============================================================================

#[tokio::test]
async fn test_balances_request() {
    let transport = RecordingTransport::new();
    transport.reply(r#"{"BTC":"0.59098578","LTC":"3.31117268"}"#);

    let balances = trading(&transport).account().balances().await.unwrap();
    assert_eq!(balances["LTC"], "3.31117268");

    let calls = transport.calls();
    match &calls[0] {
        Call::Post { url, body, sign } => {
            assert_eq!(url, "https://poloniex.com/tradingApi");
            assert_eq!(sign, &poloniex_auth::sign(body.as_bytes(), b"test-secret"));
        }
        other => panic!("expected POST, got {other:?}"),
    }
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[("command", "returnBalances")])
    );
}

#[tokio::test]
async fn test_complete_balances_account_scope() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .account()
        .complete_balances(Some(Account::All))
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[("command", "returnCompleteBalances"), ("account", "all")])
    );

    let transport = RecordingTransport::new();
    trading(&transport)
        .account()
        .complete_balances(None)
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[("command", "returnCompleteBalances")])
    );
}

#[tokio::test]
async fn test_available_account_balances_rejects_all() {
    let transport = RecordingTransport::new();
    let err = trading(&transport)
        .account()
        .available_account_balances(Some(Account::All))
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Validation(_)));
    assert!(transport.calls().is_empty());

    trading(&transport)
        .account()
        .available_account_balances(Some(Account::Margin))
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[("command", "returnAvailableAccountBalances"), ("account", "margin")])
    );
}

#[tokio::test]
async fn test_transfer_balance_rejects_bogus_account_without_io() {
    let transport = RecordingTransport::new();
    let client = trading(&transport);

    let err = client
        .account()
        .transfer_balance("BTC", dec!(2), "bogus", "margin")
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Validation(ref m) if m.contains("fromAccount")));

    let err = client
        .account()
        .transfer_balance("BTC", dec!(2), "exchange", "all")
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Validation(ref m) if m.contains("toAccount")));

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_transfer_balance_request() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .account()
        .transfer_balance("btc", dec!(2.50), "exchange", "margin")
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "transferBalance"),
            ("currency", "BTC"),
            ("amount", "2.5"),
            ("fromAccount", "exchange"),
            ("toAccount", "margin"),
        ])
    );
}

#[tokio::test]
async fn test_withdraw_payment_id_only_for_xmr() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .account()
        .withdraw("xmr", dec!(1), "4Abc", Some("pid-1"))
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "withdraw"),
            ("currency", "XMR"),
            ("amount", "1"),
            ("address", "4Abc"),
            ("paymentId", "pid-1"),
        ])
    );

    let transport = RecordingTransport::new();
    trading(&transport)
        .account()
        .withdraw("BTC", dec!(0.1), "1Abc", Some("pid-1"))
        .await
        .unwrap();
    let body = without_nonce(transport.single_post());
    assert!(body.iter().all(|(k, _)| k != "paymentId"));
}

#[tokio::test]
async fn test_generate_new_address_uppercases_currency() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .account()
        .generate_new_address("ltc")
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[("command", "generateNewAddress"), ("currency", "LTC")])
    );
}

// =============================================================================
// Order endpoints
// =============================================================================

#[tokio::test]
async fn test_buy_with_options() {
    let transport = RecordingTransport::new();
    transport.reply(r#"{"orderNumber":31226040,"resultingTrades":[]}"#);

    let result = trading(&transport)
        .orders()
        .buy("btc_nxt", dec!(0.00001173), dec!(100), OrderOptions::post_only())
        .await
        .unwrap();
    assert_eq!(result["orderNumber"], 31226040);
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "buy"),
            ("currencyPair", "BTC_NXT"),
            ("rate", "0.00001173"),
            ("amount", "100"),
            ("postOnly", "1"),
        ])
    );
}

#[tokio::test]
async fn test_sell_without_options() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .orders()
        .sell("BTC_LTC", dec!(0.02), dec!(3), OrderOptions::default())
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "sell"),
            ("currencyPair", "BTC_LTC"),
            ("rate", "0.02"),
            ("amount", "3"),
        ])
    );
}

#[tokio::test]
async fn test_trade_history_range_rules() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .orders()
        .trade_history("all", Some(100), Some(200))
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "returnTradeHistory"),
            ("currencyPair", "ALL"),
            ("start", "100"),
            ("end", "200"),
        ])
    );

    // Inverted or partial ranges are dropped
    for (start, end) in [(Some(200), Some(100)), (Some(100), None), (None, Some(200))] {
        let transport = RecordingTransport::new();
        trading(&transport)
            .orders()
            .trade_history("btc_nxt", start, end)
            .await
            .unwrap();
        assert_eq!(
            without_nonce(transport.single_post()),
            pairs(&[("command", "returnTradeHistory"), ("currencyPair", "BTC_NXT")])
        );
    }
}

#[tokio::test]
async fn test_open_orders_pair_passed_through() {
    let transport = RecordingTransport::new();
    trading(&transport).orders().open_orders("all").await.unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[("command", "returnOpenOrders"), ("currencyPair", "all")])
    );
}

#[tokio::test]
async fn test_move_order_amount_only_when_positive() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .orders()
        .move_order("12345", dec!(0.5), Some(dec!(0)), MoveOrderOptions::default())
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[("command", "moveOrder"), ("orderNumber", "12345"), ("rate", "0.5")])
    );

    let transport = RecordingTransport::new();
    let options = MoveOrderOptions {
        immediate_or_cancel: true,
        post_only: false,
    };
    trading(&transport)
        .orders()
        .move_order("12345", dec!(0.5), Some(dec!(2)), options)
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "moveOrder"),
            ("orderNumber", "12345"),
            ("rate", "0.5"),
            ("amount", "2"),
            ("immediateOrCancel", "1"),
        ])
    );
}

#[tokio::test]
async fn test_cancel_order_api_error() {
    let transport = RecordingTransport::new();
    transport.reply(r#"{"error":"Invalid order number."}"#);

    let err = trading(&transport)
        .orders()
        .cancel_order("999")
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Api { ref message } if message == "Invalid order number."));
}

// =============================================================================
// Margin and lending endpoints
// =============================================================================

#[tokio::test]
async fn test_margin_buy_lending_rate_only_when_positive() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .margin()
        .buy("btc_xmr", dec!(0.0035), dec!(20), Some(dec!(0.02)))
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "marginBuy"),
            ("currencyPair", "BTC_XMR"),
            ("rate", "0.0035"),
            ("amount", "20"),
            ("lendingRate", "0.02"),
        ])
    );

    let transport = RecordingTransport::new();
    trading(&transport)
        .margin()
        .sell("BTC_XMR", dec!(0.0035), dec!(20), Some(dec!(0)))
        .await
        .unwrap();
    let body = without_nonce(transport.single_post());
    assert_eq!(body[0].1, "marginSell");
    assert!(body.iter().all(|(k, _)| k != "lendingRate"));
}

#[tokio::test]
async fn test_margin_position_commands() {
    let transport = RecordingTransport::new();
    let client = trading(&transport);
    client.margin().position("btc_xmr").await.unwrap();
    client.margin().close_position("btc_xmr").await.unwrap();
    client.margin().account_summary().await.unwrap();

    let commands: Vec<String> = transport
        .calls()
        .into_iter()
        .map(|c| match c {
            Call::Post { body, .. } => {
                let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&body).unwrap();
                decoded[0].1.clone()
            }
            other => panic!("expected POST, got {other:?}"),
        })
        .collect();
    assert_eq!(
        commands,
        ["getMarginPosition", "closeMarginPosition", "returnMarginAccountSummary"]
    );
}

#[tokio::test]
async fn test_create_loan_offer() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .lending()
        .create_loan_offer("btc", dec!(1), 2, true, dec!(0.0015))
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "createLoanOffer"),
            ("currency", "BTC"),
            ("amount", "1"),
            ("duration", "2"),
            ("autoRenew", "1"),
            ("lendingRate", "0.0015"),
        ])
    );
}

#[tokio::test]
async fn test_lending_history_limit_only_when_positive() {
    let transport = RecordingTransport::new();
    trading(&transport)
        .lending()
        .lending_history(1410158341, 1410499372, Some(0))
        .await
        .unwrap();
    assert_eq!(
        without_nonce(transport.single_post()),
        pairs(&[
            ("command", "returnLendingHistory"),
            ("start", "1410158341"),
            ("end", "1410499372"),
        ])
    );

    let transport = RecordingTransport::new();
    trading(&transport)
        .lending()
        .lending_history(1410158341, 1410499372, Some(25))
        .await
        .unwrap();
    let body = without_nonce(transport.single_post());
    assert_eq!(body.last().unwrap(), &("limit".to_string(), "25".to_string()));
}

#[tokio::test]
async fn test_trading_calls_share_nonce_sequence() {
    let transport = RecordingTransport::new();
    let client = trading(&transport);
    client.account().fee_info().await.unwrap();
    client.lending().active_loans().await.unwrap();
    client.orders().order_trades("1").await.unwrap();

    let nonces: Vec<u64> = transport
        .calls()
        .into_iter()
        .map(|c| match c {
            Call::Post { body, .. } => {
                let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&body).unwrap();
                decoded.last().unwrap().1.parse().unwrap()
            }
            other => panic!("expected POST, got {other:?}"),
        })
        .collect();
    assert!(nonces.windows(2).all(|w| w[0] < w[1]));
}

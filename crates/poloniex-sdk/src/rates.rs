//! BTC/USD rates derived from market data responses
//!
//! Both functions work on already-decoded JSON so they can be used on
//! responses fetched elsewhere.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

/// Market whose prices are used as the BTC/USD rate
pub const BTC_USD_PAIR: &str = "USDT_BTC";

/// Last traded price of `pair` in a ticker response
///
/// Returns `None` when the ticker is not an object, the pair is missing, or
/// its `last` field is not a number.
pub fn ticker_rate(ticker: &Value, pair: &str) -> Option<Decimal> {
    ticker.as_object()?.get(pair)?.get("last").and_then(parse_price)
}

/// Mean of every price level in an order book response
///
/// Every array-valued entry of the book (`asks`, `bids`) contributes the
/// first element of each of its levels. Scalar entries such as `isFrozen` or
/// `seq` are skipped, as are levels whose price does not parse or would push
/// the mean outside the decimal range. An empty book yields zero.
pub fn estimate_rate(book: &Value) -> Decimal {
    let Some(entries) = book.as_object() else {
        return Decimal::ZERO;
    };

    let mut mean = Decimal::ZERO;
    let mut n = Decimal::ZERO;

    for levels in entries.values().filter_map(Value::as_array) {
        for price in levels.iter().filter_map(|level| level.get(0)).filter_map(parse_price) {
            // mean + (price - mean) / (n + 1), which stays within the range of the prices
            let next = price
                .checked_sub(mean)
                .and_then(|delta| delta.checked_div(n + Decimal::ONE))
                .and_then(|step| mean.checked_add(step));

            match next {
                Some(next) => {
                    mean = next;
                    n += Decimal::ONE;
                }
                None => warn!(%price, "Skipping order book level outside the decimal range"),
            }
        }
    }

    mean
}

/// Parse a price sent either as a JSON string or a JSON number
fn parse_price(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        _ => None,
    }
}

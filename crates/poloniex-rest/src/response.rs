//! Response decoding and error detection
//!
//! Poloniex reports failures as a JSON object with an `error` member, often
//! with a 2xx or 4xx status alike, so the body decides success.

use serde_json::Value;
use tracing::warn;

use crate::error::{RestError, RestResult};

/// Largest raw body kept inside a decode error
const MAX_RAW_IN_ERROR: usize = 512;

/// Parse a response body and surface an exchange error
pub fn decode(raw: &str) -> RestResult<Value> {
    let value: Value = serde_json::from_str(raw).map_err(|e| RestError::Decode {
        message: e.to_string(),
        raw: Some(truncate(raw)),
    })?;

    match api_error(&value) {
        Some(message) => {
            warn!(%message, "Poloniex API returned an error");
            Err(RestError::Api { message })
        }
        None => Ok(value),
    }
}

/// Extract the exchange's error message, if the body carries one
///
/// A present but `null` `error` member does not count as an error.
pub fn api_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn truncate(raw: &str) -> String {
    match raw.char_indices().nth(MAX_RAW_IN_ERROR) {
        Some((idx, _)) => format!("{}...", &raw[..idx]),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_passes_success_through() {
        let value = decode(r#"{"BTC":"0.59098578","LTC":"3.31117268"}"#).unwrap();
        assert_eq!(value["BTC"], "0.59098578");
    }

    #[test]
    fn test_decode_array_response() {
        let value = decode(r#"[{"tradeID":1}]"#).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_error_field_becomes_api_error() {
        let err = decode(r#"{"error":"Invalid order number."}"#).unwrap_err();
        assert_eq!(err.api_message(), Some("Invalid order number."));
    }

    #[test]
    fn test_null_error_is_not_an_error() {
        assert!(decode(r#"{"error":null,"success":1}"#).is_ok());
    }

    #[test]
    fn test_non_string_error_keeps_json_text() {
        assert_eq!(
            api_error(&json!({"error": {"code": 7}})),
            Some(r#"{"code":7}"#.to_string())
        );
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = decode("<html>502 Bad Gateway</html>").unwrap_err();
        match err {
            RestError::Decode { raw, .. } => {
                assert_eq!(raw.as_deref(), Some("<html>502 Bad Gateway</html>"))
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_long_raw_body_is_truncated() {
        let body = "x".repeat(2_000);
        match decode(&body).unwrap_err() {
            RestError::Decode { raw: Some(raw), .. } => {
                assert_eq!(raw.len(), MAX_RAW_IN_ERROR + 3)
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}

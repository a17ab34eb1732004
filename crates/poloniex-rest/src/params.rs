//! Command parameters and their form encoding
//!
//! Both the trading POST body and the public query string are
//! `application/x-www-form-urlencoded`. Pairs keep insertion order so the
//! same `Params` always encodes to the same bytes.

use rust_decimal::Decimal;
use std::fmt;

use crate::error::{RestError, RestResult};

/// A scalar parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Sent verbatim
    Text(String),
    /// Sent in decimal form
    Int(i64),
    /// Sent in shortest round-trip form, never in exponent notation
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Flags are sent as `1` / `0`
impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        Self::Text(value.normalize().to_string())
    }
}

/// Ordered parameter list for one command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter only when a value is present
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Set a parameter
    ///
    /// An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check if a parameter is set
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Append every parameter of `other`, overriding existing keys
    pub fn extend(&mut self, other: Params) {
        for (key, value) in other.pairs {
            self.insert(key, value);
        }
    }

    /// Form-encode the parameters
    pub fn encode(&self) -> RestResult<String> {
        encode(self)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Form-encode parameters as `k1=v1&k2=v2`
///
/// Keys and values are percent-escaped per `application/x-www-form-urlencoded`
/// (space becomes `+`). NaN and infinite floats are rejected.
pub fn encode(params: &Params) -> RestResult<String> {
    let pairs = params
        .pairs
        .iter()
        .map(|(k, v)| match v {
            ParamValue::Float(x) if !x.is_finite() => Err(RestError::Encode(format!(
                "parameter '{}' is not a finite number: {}",
                k, x
            ))),
            _ => Ok((k.as_str(), v.to_string())),
        })
        .collect::<RestResult<Vec<(&str, String)>>>()?;

    serde_urlencoded::to_string(&pairs).map_err(|e| RestError::Encode(e.to_string()))
}

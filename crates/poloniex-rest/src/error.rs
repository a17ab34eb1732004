//! Error types for REST API operations

use poloniex_auth::AuthError;

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP round trip failed (connect, DNS, timeout, unreadable body)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response body was not valid JSON
    #[error("Decode error: {message}")]
    Decode {
        /// Parser message
        message: String,
        /// Raw body as received
        raw: Option<String>,
    },

    /// The exchange answered with an `error` field
    #[error("Poloniex API error: {message}")]
    Api {
        /// Error message exactly as sent by the exchange
        message: String,
    },

    /// A precondition failed before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Response had the wrong shape for a derived read
    #[error("Invalid Poloniex API response: {0}")]
    EmptyResponse(String),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credentials could not be loaded
    #[error("Credentials error: {0}")]
    Auth(#[from] AuthError),

    /// Parameters could not be form-encoded
    #[error("Encode error: {0}")]
    Encode(String),
}

impl RestError {
    /// Build an API error from the exchange's `error` value
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Check if the exchange rejected the request
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// The exchange's error message, if this is an API error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }

    /// Check if a retry by the caller could succeed
    ///
    /// Advisory only: this client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_transient(),
            _ => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

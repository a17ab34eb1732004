//! API credentials for the Poloniex trading API
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Keeps the secret out of `Debug` output
//! - Requires explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::signer;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "POLONIEX_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "POLONIEX_API_SECRET";

/// API credentials for authenticated requests
pub struct Credentials {
    /// API key (sent in the `Key` header)
    api_key: String,
    /// API secret (HMAC key, zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// Both values must be non-empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `POLONIEX_API_KEY` and `POLONIEX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        debug!("Loaded API credentials from {}", API_KEY_ENV);
        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request body with the API secret
    ///
    /// Returns the lowercase hex HMAC-SHA512 digest for the `Sign` header.
    pub fn sign(&self, body: &[u8]) -> String {
        signer::sign(body, self.api_secret.expose_secret().as_bytes())
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", visible))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

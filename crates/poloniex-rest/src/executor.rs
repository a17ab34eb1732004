//! Authenticated command execution
//!
//! Every private call goes through [`RequestExecutor::execute`]:
//!
//! 1. wait until `min_request_interval` has passed since the previous request
//!    completed
//! 2. append `command` and a fresh `nonce` to the parameters
//! 3. form-encode the body
//! 4. sign exactly those bytes with HMAC-SHA512
//! 5. POST with `Key` / `Sign` headers
//! 6. decode JSON and turn an `error` member into [`RestError::Api`]
//!
//! The request gate is held for the whole round trip, so requests from one
//! executor reach the exchange one at a time and in nonce order. Pacing is
//! per executor; executors sharing a transport pace independently.

use poloniex_auth::{Credentials, NonceGenerator};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::RestResult;
use crate::params::Params;
use crate::response;
use crate::transport::{AuthHeaders, Transport};
use crate::types::Command;

/// Signs and sends authenticated commands
pub struct RequestExecutor {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    nonces: NonceGenerator,
    trading_url: String,
    min_interval: Duration,
    /// When the previous request completed
    gate: Mutex<Option<Instant>>,
}

impl RequestExecutor {
    /// Create an executor for one credential set
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            credentials,
            transport,
            nonces: NonceGenerator::new(),
            trading_url: config.trading_url.clone(),
            min_interval: config.min_request_interval,
            gate: Mutex::new(None),
        }
    }

    /// API key this executor signs for
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Minimum spacing between two requests
    pub fn min_request_interval(&self) -> Duration {
        self.min_interval
    }

    /// Execute a typed command
    pub async fn execute_command(&self, command: Command, params: Params) -> RestResult<Value> {
        self.execute(command.as_str(), params).await
    }

    /// Execute a command by wire name
    ///
    /// `params` must not contain `command` or `nonce`; both are set here and
    /// override caller values.
    #[instrument(skip(self, params))]
    pub async fn execute(&self, command: &str, params: Params) -> RestResult<Value> {
        let mut last_sent = self.gate.lock().await;

        if let Some(previous) = *last_sent {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(?wait, "Pacing authenticated request");
                sleep(wait).await;
            }
        }

        let mut body_params = Params::new().with("command", command);
        body_params.extend(params);
        body_params.insert("nonce", self.nonces.next());

        let body = body_params.encode()?;
        let headers = AuthHeaders {
            key: self.credentials.api_key().to_string(),
            sign: self.credentials.sign(body.as_bytes()),
        };

        debug!(url = %self.trading_url, "Sending authenticated request");
        let sent = self
            .transport
            .post_authenticated(&self.trading_url, &body, &headers)
            .await;
        *last_sent = Some(Instant::now());
        drop(last_sent);

        response::decode(&sent?)
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("credentials", &self.credentials)
            .field("trading_url", &self.trading_url)
            .field("min_interval", &self.min_interval)
            .finish()
    }
}

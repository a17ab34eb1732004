//! Authentication primitives for the Poloniex trading API
//!
//! Private Poloniex commands are form-encoded POST bodies carrying a strictly
//! increasing `nonce`, signed with HMAC-SHA512 over the exact body bytes.
//! This crate provides the pieces; `poloniex-rest` puts them together.
//!
//! # Example
//!
//! ```
//! use poloniex_auth::{Credentials, NonceGenerator};
//!
//! let creds = Credentials::new("my-key", "my-secret").unwrap();
//! let nonces = NonceGenerator::new();
//!
//! let body = format!("command=returnBalances&nonce={}", nonces.next());
//! let signature = creds.sign(body.as_bytes());
//! assert_eq!(signature.len(), 128);
//! ```

mod credentials;
mod error;
mod nonce;
pub mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use nonce::NonceGenerator;
pub use signer::sign;

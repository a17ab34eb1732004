//! HMAC-SHA512 request signing
//!
//! Poloniex verifies the `Sign` header by computing HMAC-SHA512 over the raw
//! POST body with the API secret as key, hex encoded in lowercase. The body
//! that is signed must be byte-for-byte the body that is sent.

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Sign a request body
///
/// # Arguments
/// * `body` - The exact bytes that will be transmitted as the POST body
/// * `secret` - API secret used as the HMAC key
///
/// # Returns
/// Lowercase hex encoded HMAC-SHA512 digest (128 characters)
pub fn sign(body: &[u8], secret: &[u8]) -> String {
    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

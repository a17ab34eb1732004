//! Strictly increasing request nonces
//!
//! The exchange rejects any nonce that is not greater than the last one it
//! accepted for a key. Values are unix seconds followed by six microsecond
//! digits, bumped past the last issued value whenever the clock has not
//! advanced (same tick, or the wall clock stepped backwards).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-client nonce source
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    /// Create a generator that has not issued anything yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next nonce
    ///
    /// Safe to call from several tasks at once; every caller gets a distinct
    /// value and values never decrease.
    pub fn next(&self) -> u64 {
        let now = Self::clock_micros();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    /// Last value handed out, or 0 if none
    pub fn last_issued(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }

    /// Seconds and microseconds since the epoch, concatenated
    fn clock_micros() -> u64 {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        elapsed.as_secs() * 1_000_000 + u64::from(elapsed.subsec_micros())
    }
}

//! Time source for entry timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies "now" in Unix epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

//! Time source abstraction.
//!
//! TTL expiry in the status cache and the download ledger depends on
//! wall time. Injecting the clock through this port keeps that logic
//! testable with a simulated clock (`test_utils::FixedClock`).

use chrono::{DateTime, Utc};

/// Provides the current time.
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}

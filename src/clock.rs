//! Time source used to measure how long each receive attempt took.

use std::time::Instant;

/// Monotonic time source.
///
/// Filter chains read the clock before and after every attempt; the
/// difference is deducted from the remaining read timeout.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant { Instant::now() }
}

use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use frame_filter::Clock;

/// [`Clock`] that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) { self.offset.set(self.offset.get() + by); }

    /// Total time the clock has been advanced.
    pub fn elapsed(&self) -> Duration { self.offset.get() }
}

impl Default for ManualClock {
    fn default() -> Self { Self::new() }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant { self.base + self.offset.get() }
}

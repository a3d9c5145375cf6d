//! Capture of the `log` records that `tracing` forwards during a test.
//!
//! `logtest` installs one process-wide logger, so every test goes through a
//! single [`LoggerHandle`] guarded by a mutex. Tests that assert on logs
//! should also share a `serial_test` key.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use logtest::Logger;
use rstest::fixture;

static CAPTURE: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Exclusive access to the captured log records.
pub struct LoggerHandle {
    capture: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Lock the process-wide capture, starting it on first use.
    pub fn new() -> Self {
        let capture = CAPTURE
            .get_or_init(|| Mutex::new(Logger::start()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Self { capture }
    }

    /// Discard everything captured so far.
    pub fn clear(&mut self) { while self.capture.pop().is_some() {} }

    /// Drain captured records, returning their rendered messages in order.
    pub fn messages(&mut self) -> Vec<String> {
        std::iter::from_fn(|| self.capture.pop())
            .map(|record| record.args().to_string())
            .collect()
    }

    /// Number of records waiting to be drained.
    pub fn pending(&mut self) -> usize { self.capture.len() }
}

impl Default for LoggerHandle {
    fn default() -> Self { Self::new() }
}

/// Fixture yielding a cleared [`LoggerHandle`].
#[fixture]
pub fn logger() -> LoggerHandle {
    let mut handle = LoggerHandle::new();
    handle.clear();
    handle
}

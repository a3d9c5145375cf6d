//! Metric helpers for `frame_filter`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. Without the `metrics` feature
//! the helpers compile to no-ops.

/// Name of the counter tracking frames suppressed by filters.
pub const FRAMES_DISCARDED: &str = "frame_filter_frames_discarded_total";
/// Name of the counter tracking timeouts raised by filters.
pub const TIMEOUTS_TOTAL: &str = "frame_filter_timeouts_total";

/// Record a frame discarded by the filter named `filter`.
#[cfg(feature = "metrics")]
pub fn inc_discarded(filter: &str) {
    metrics::counter!(FRAMES_DISCARDED, "filter" => filter.to_owned()).increment(1);
}

/// Record a frame discarded by the filter named `filter`.
#[cfg(not(feature = "metrics"))]
pub fn inc_discarded(_filter: &str) {}

/// Record a timeout raised because discarding exhausted the read timeout.
#[cfg(feature = "metrics")]
pub fn inc_timeouts() { metrics::counter!(TIMEOUTS_TOTAL).increment(1); }

/// Record a timeout raised because discarding exhausted the read timeout.
#[cfg(not(feature = "metrics"))]
pub fn inc_timeouts() {}

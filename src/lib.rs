#![doc(html_root_url = "https://docs.rs/frame_filter/latest")]
//! Public API for the `frame_filter` library.
//!
//! This crate sits between a caller waiting for the next application frame
//! and a blocking [`Transport`] that yields raw WebSocket frames. A
//! [`FilterChain`] discards the frames its filters match, answers pings when
//! configured to, reports each discard to a [`ReportSink`], and enforces one
//! read timeout across every frame it had to skip.
//!
//! Chains are single-threaded: filters are shared through [`std::rc::Rc`]
//! handles, so a chain cannot leave the thread that built it.

pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod frame;
pub mod metrics;
pub mod report;
pub mod transport;

pub use clock::{Clock, SystemClock};
pub use config::{ChainConfig, FilterConfig};
/// Result type alias re-exported for convenience when driving a chain.
pub use error::Result;
pub use error::{FilterConfigError, TransportError};
pub use filter::{
    BinaryFrameFilter,
    ComparisonType,
    FilterChain,
    FilterNode,
    FrameFilter,
    PingPongFilterType,
    PingPongFrameFilter,
    SharedFilter,
    TextFrameFilter,
    shared,
};
pub use frame::{Frame, FrameKind};
pub use crate::metrics::{FRAMES_DISCARDED, TIMEOUTS_TOTAL};
pub use report::{DiscardRecord, ReportSink, SampleResult};
pub use transport::Transport;

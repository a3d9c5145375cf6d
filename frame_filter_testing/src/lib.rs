//! Test doubles for driving a [`FilterChain`](frame_filter::FilterChain)
//! deterministically.
//!
//! A [`ScriptedTransport`] replays a fixed timeline of frames and failures
//! against a shared [`ManualClock`], so every receive attempt takes exactly
//! the time the script says.
//!
//! ```rust
//! use std::{rc::Rc, time::Duration};
//!
//! use frame_filter::{DiscardRecord, FilterChain, Frame};
//! use frame_filter_testing::{ManualClock, ScriptedTransport};
//!
//! let clock = Rc::new(ManualClock::new());
//! let mut transport = ScriptedTransport::new(clock.clone()).frame_after(5, Frame::text("hi"));
//! let chain = FilterChain::with_clock(clock.clone());
//! let mut records: Vec<DiscardRecord> = Vec::new();
//!
//! let frame = chain
//!     .receive_frame(&mut transport, Duration::from_millis(100), &mut records)
//!     .unwrap();
//! assert_eq!(frame, Frame::text("hi"));
//! assert_eq!(clock.elapsed(), Duration::from_millis(5));
//! ```

pub mod clock;
pub mod filters;
pub mod logging;
pub mod transport;

pub use clock::ManualClock;
pub use filters::KindFilter;
pub use logging::{LoggerHandle, logger};
pub use transport::ScriptedTransport;

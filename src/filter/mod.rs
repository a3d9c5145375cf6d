//! Chainable frame filters.
//!
//! A [`FrameFilter`] decides whether a received [`Frame`] is hidden from the
//! caller and may react to frames it hides. Filters are linked into a
//! [`FilterChain`]: each [`FilterNode`] pulls its candidate frames from its
//! successor (or from the transport when it is last) and keeps pulling while
//! its own filter matches, all within one shrinking read timeout.
//!
//! Filters are shared as [`SharedFilter`] handles. Appending a handle that is
//! already linked is ignored, and because handles are reference counted
//! without atomics, a chain can only ever be driven from the thread that
//! built it.

use std::{cell::RefCell, rc::Rc};

use crate::{error::Result, frame::Frame, transport::Transport};

pub mod binary;
pub mod chain;
pub mod comparison;
pub mod node;
pub mod ping_pong;
pub mod text;

pub use binary::BinaryFrameFilter;
pub use chain::FilterChain;
pub use comparison::ComparisonType;
pub use node::FilterNode;
pub use ping_pong::{PingPongFilterType, PingPongFrameFilter};
pub use text::TextFrameFilter;

/// Behaviour of one filtering stage.
///
/// # Examples
///
/// ```
/// use frame_filter::{Frame, FrameFilter};
///
/// /// Hides close frames from the caller.
/// struct IgnoreClose;
///
/// impl FrameFilter for IgnoreClose {
///     fn name(&self) -> &str { "ignore-close" }
///
///     fn matches(&self, frame: &Frame) -> bool { matches!(frame, Frame::Close { .. }) }
/// }
///
/// assert!(IgnoreClose.matches(&Frame::close(Some(1000), "")));
/// assert!(!IgnoreClose.matches(&Frame::text("hello")));
/// ```
pub trait FrameFilter {
    /// Name used in discard reports and chain rendering.
    fn name(&self) -> &str;

    /// Called once at the start of every receive call that reaches this
    /// filter, before any frame is requested.
    fn prepare(&mut self) {}

    /// Whether `frame` must be hidden from the caller.
    ///
    /// Must depend only on `frame` and the filter's settings.
    fn matches(&self, frame: &Frame) -> bool;

    /// React to a frame this filter hides, before the discard is reported.
    ///
    /// # Errors
    ///
    /// Any error aborts the receive call; the frame is then not reported as
    /// discarded.
    fn reply(&mut self, transport: &mut dyn Transport, frame: &Frame) -> Result<()> {
        let _ = (transport, frame);
        Ok(())
    }
}

/// Shared handle to a filter linked into a chain.
pub type SharedFilter = Rc<RefCell<dyn FrameFilter>>;

/// Wrap `filter` in a [`SharedFilter`] handle.
pub fn shared<F: FrameFilter + 'static>(filter: F) -> SharedFilter { Rc::new(RefCell::new(filter)) }

#[cfg(test)]
mod tests;

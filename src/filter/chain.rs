//! Ownership of a filter chain and its entry point.

use std::{fmt, rc::Rc, time::Duration};

use super::{FilterNode, SharedFilter};
use crate::{
    clock::{Clock, SystemClock},
    error::Result,
    frame::Frame,
    report::ReportSink,
    transport::Transport,
};

/// Ordered chain of frame filters, owned by one session.
///
/// Filters run in the order they were appended. The first filter sees the
/// frames every later filter let through, so a frame returned from
/// [`FilterChain::receive_frame`] matches none of them.
///
/// # Examples
///
/// ```
/// use frame_filter::{FilterChain, PingPongFilterType, PingPongFrameFilter, shared};
///
/// let mut chain = FilterChain::new();
/// let pings = shared(PingPongFrameFilter::new("pings", PingPongFilterType::PingOrPong)?);
/// chain.append(pings.clone());
/// chain.append(pings);
///
/// assert_eq!(chain.len(), 1);
/// assert_eq!(chain.to_string(), "Frame Filter 'pings'");
/// # Ok::<(), frame_filter::FilterConfigError>(())
/// ```
pub struct FilterChain {
    head: Option<FilterNode>,
    clock: Rc<dyn Clock>,
}

impl FilterChain {
    /// Create an empty chain timed by the system clock.
    #[must_use]
    pub fn new() -> Self { Self::with_clock(Rc::new(SystemClock)) }

    /// Create an empty chain timed by `clock`.
    #[must_use]
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self { Self { head: None, clock } }

    /// Append `filter` after the filters already in the chain.
    ///
    /// Appending a handle that is already linked leaves the chain unchanged.
    pub fn append(&mut self, filter: SharedFilter) -> &mut Self {
        match &mut self.head {
            Some(head) => head.set_next(filter),
            None => self.head = Some(FilterNode::new(filter)),
        }
        self
    }

    /// Builder form of [`FilterChain::append`].
    #[must_use]
    pub fn with_filter(mut self, filter: SharedFilter) -> Self {
        self.append(filter);
        self
    }

    /// First node of the chain, if any filter was appended.
    #[must_use]
    pub fn head(&self) -> Option<&FilterNode> { self.head.as_ref() }

    /// Iterate over the nodes in traversal order.
    pub fn nodes(&self) -> impl Iterator<Item = &FilterNode> {
        std::iter::successors(self.head.as_ref(), |node| node.next())
    }

    /// Number of filters in the chain.
    #[must_use]
    pub fn len(&self) -> usize { self.nodes().count() }

    /// Whether no filter has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.head.is_none() }

    /// Names of the linked filters in traversal order.
    #[must_use]
    pub fn filter_names(&self) -> Vec<String> {
        self.nodes()
            .map(|node| node.filter().borrow().name().to_owned())
            .collect()
    }

    /// Receive the next frame no filter in the chain discards.
    ///
    /// `read_timeout` bounds the whole call, including the time spent on
    /// frames that were discarded. With no filters appended the transport is
    /// read directly.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Timeout`](crate::TransportError::Timeout)
    /// when no acceptable frame arrives in time and propagates transport and
    /// reply errors unchanged. Discards reported before the failure stay in
    /// `report`.
    pub fn receive_frame(
        &self,
        transport: &mut dyn Transport,
        read_timeout: Duration,
        report: &mut dyn ReportSink,
    ) -> Result<Frame> {
        match &self.head {
            Some(head) => head.receive_frame(transport, read_timeout, self.clock.as_ref(), report),
            None => transport.receive_frame(read_timeout),
        }
    }
}

impl Default for FilterChain {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.head {
            Some(head) => f.write_str(&head.chain_description()),
            None => f.write_str("<empty chain>"),
        }
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("head", &self.head)
            .finish_non_exhaustive()
    }
}

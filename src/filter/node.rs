//! A single stage of a filter chain and the receive algorithm.

use std::{fmt, rc::Rc, time::Duration};

use tracing::debug;

use super::SharedFilter;
use crate::{
    clock::Clock,
    error::{Result, TransportError},
    frame::Frame,
    metrics,
    report::{DiscardRecord, ReportSink},
    transport::Transport,
};

/// One filter linked to an optional successor.
///
/// The node owns its successor, so a chain is a singly linked list rooted at
/// the head node. A node without a successor reads straight from the
/// transport.
pub struct FilterNode {
    filter: SharedFilter,
    next: Option<Box<FilterNode>>,
}

impl FilterNode {
    /// Create a terminal node for `filter`.
    #[must_use]
    pub fn new(filter: SharedFilter) -> Self { Self { filter, next: None } }

    /// The filter evaluated by this node.
    #[must_use]
    pub fn filter(&self) -> &SharedFilter { &self.filter }

    /// The successor this node reads from, if any.
    #[must_use]
    pub fn next(&self) -> Option<&FilterNode> { self.next.as_deref() }

    /// Append `filter` at the end of the chain starting at this node.
    ///
    /// A filter handle already present in the chain is ignored, so
    /// registering the same filter twice leaves the chain unchanged.
    pub fn set_next(&mut self, filter: SharedFilter) {
        if Rc::ptr_eq(&self.filter, &filter) {
            debug!(filter = %self, "ignoring additional filter; already present in chain");
        } else if let Some(next) = &mut self.next {
            next.set_next(filter);
        } else {
            self.next = Some(Box::new(Self::new(filter)));
        }
    }

    /// Receive the next frame that neither this node nor any successor
    /// discards, waiting no longer than `read_timeout` in total.
    ///
    /// Each attempt delegates to the successor (or the transport) with the
    /// timeout still remaining, then deducts the time the attempt took. A
    /// frame this node's filter matches triggers the filter's reply, is
    /// reported to `report`, and the node tries again. Once a single attempt
    /// has used up the whole remaining timeout the call fails with
    /// [`TransportError::Timeout`], even if that attempt produced a frame.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Timeout`] when the timeout is exhausted, and
    /// propagates any error from the transport or a reply unchanged.
    pub fn receive_frame(
        &self,
        transport: &mut dyn Transport,
        read_timeout: Duration,
        clock: &dyn Clock,
        report: &mut dyn ReportSink,
    ) -> Result<Frame> {
        self.filter.borrow_mut().prepare();

        let mut remaining = read_timeout;
        loop {
            let start = clock.now();
            let frame = match &self.next {
                Some(next) => next.receive_frame(transport, remaining, clock, report)?,
                None => transport.receive_frame(remaining)?,
            };
            let elapsed = clock.now().saturating_duration_since(start);

            let discarded = self.discard_if_matching(transport, &frame, report)?;

            if elapsed < remaining {
                remaining -= elapsed;
            } else {
                debug!(
                    filter = %self,
                    timeout = ?read_timeout,
                    "read timeout used up while waiting for an unfiltered frame"
                );
                metrics::inc_timeouts();
                return Err(TransportError::Timeout);
            }

            if !discarded {
                return Ok(frame);
            }
        }
    }

    fn discard_if_matching(
        &self,
        transport: &mut dyn Transport,
        frame: &Frame,
        report: &mut dyn ReportSink,
    ) -> Result<bool> {
        let mut filter = self.filter.borrow_mut();
        if !filter.matches(frame) {
            return Ok(false);
        }

        debug!(filter = filter.name(), %frame, "filter discards frame");
        filter.reply(transport, frame)?;

        report.add_sub_result(DiscardRecord::discarded(frame, filter.name()));
        metrics::inc_discarded(filter.name());
        Ok(true)
    }

    /// Render this node and its successors, e.g.
    /// `Frame Filter 'a' -> Frame Filter 'b'`.
    #[must_use]
    pub fn chain_description(&self) -> String {
        match &self.next {
            Some(next) => format!("{self} -> {}", next.chain_description()),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame Filter '{}'", self.filter.borrow().name())
    }
}

impl fmt::Debug for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterNode")
            .field("filter", &self.filter.borrow().name())
            .field("next", &self.next)
            .finish()
    }
}

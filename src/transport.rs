//! Boundary to the lower-level frame transport.
//!
//! The filter chain only ever asks a transport for one raw frame at a time
//! and, from reply hooks, to send a frame back. Framing, decoding and socket
//! handling are the implementor's concern.

use std::time::Duration;

use crate::{error::Result, frame::Frame};

/// Blocking source of decoded frames.
pub trait Transport {
    /// Block until one frame arrives or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Timeout`](crate::TransportError::Timeout)
    /// when no frame arrives in time, or any other transport error
    /// (connection closed, decode failure) as it occurs.
    fn receive_frame(&mut self, timeout: Duration) -> Result<Frame>;

    /// Write `frame` to the peer.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written.
    fn send_frame(&mut self, frame: &Frame) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn receive_frame(&mut self, timeout: Duration) -> Result<Frame> {
        (**self).receive_frame(timeout)
    }

    fn send_frame(&mut self, frame: &Frame) -> Result<()> { (**self).send_frame(frame) }
}

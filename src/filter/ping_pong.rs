//! Filter hiding liveness probes, optionally answering pings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::FrameFilter;
use crate::{
    error::{FilterConfigError, Result},
    frame::{Frame, FrameKind},
    transport::Transport,
};

/// Control frame kinds hidden by a [`PingPongFrameFilter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PingPongFilterType {
    /// Only ping frames.
    Ping,
    /// Only pong frames.
    Pong,
    /// Both ping and pong frames.
    #[default]
    PingOrPong,
}

impl PingPongFilterType {
    /// Whether frames of `kind` are hidden.
    #[must_use]
    pub const fn covers(self, kind: FrameKind) -> bool {
        matches!(
            (self, kind),
            (Self::Ping | Self::PingOrPong, FrameKind::Ping)
                | (Self::Pong | Self::PingOrPong, FrameKind::Pong)
        )
    }
}

/// Discards ping and/or pong frames.
///
/// When `reply_to_ping` is set, every discarded ping is answered with a pong
/// carrying the same application data before the discard is reported.
#[derive(Debug)]
pub struct PingPongFrameFilter {
    name: String,
    filter_type: PingPongFilterType,
    reply_to_ping: bool,
    pongs_sent: usize,
}

impl PingPongFrameFilter {
    /// Create a filter for `filter_type`.
    ///
    /// Replying to pings is enabled unless only pongs are filtered.
    ///
    /// # Errors
    ///
    /// Returns [`FilterConfigError::EmptyName`] for an empty name.
    pub fn new(
        name: impl Into<String>,
        filter_type: PingPongFilterType,
    ) -> std::result::Result<Self, FilterConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FilterConfigError::EmptyName);
        }
        Ok(Self {
            name,
            filter_type,
            reply_to_ping: filter_type != PingPongFilterType::Pong,
            pongs_sent: 0,
        })
    }

    /// Enable or disable answering discarded pings.
    #[must_use]
    pub fn with_reply_to_ping(mut self, reply_to_ping: bool) -> Self {
        self.reply_to_ping = reply_to_ping;
        self
    }

    /// Whether discarded pings are answered.
    #[must_use]
    pub fn replies_to_ping(&self) -> bool { self.reply_to_ping }

    /// Pongs sent during the most recent receive call.
    #[must_use]
    pub fn pongs_sent(&self) -> usize { self.pongs_sent }
}

impl FrameFilter for PingPongFrameFilter {
    fn name(&self) -> &str { &self.name }

    fn prepare(&mut self) { self.pongs_sent = 0; }

    fn matches(&self, frame: &Frame) -> bool { self.filter_type.covers(frame.kind()) }

    fn reply(&mut self, transport: &mut dyn Transport, frame: &Frame) -> Result<()> {
        if !self.reply_to_ping {
            return Ok(());
        }
        if let Some(pong) = frame.pong_reply() {
            transport.send_frame(&pong)?;
            self.pongs_sent += 1;
            debug!(filter = %self.name, %pong, "answered ping");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{PingPongFilterType, PingPongFrameFilter};
    use crate::{filter::FrameFilter, frame::Frame};

    #[rstest]
    #[case(PingPongFilterType::Ping, true, false)]
    #[case(PingPongFilterType::Pong, false, true)]
    #[case(PingPongFilterType::PingOrPong, true, true)]
    fn matches_selected_kinds(
        #[case] filter_type: PingPongFilterType,
        #[case] ping: bool,
        #[case] pong: bool,
    ) {
        let filter = PingPongFrameFilter::new("p", filter_type).expect("valid filter");
        assert_eq!(filter.matches(&Frame::ping(vec![1])), ping);
        assert_eq!(filter.matches(&Frame::pong(vec![1])), pong);
        assert!(!filter.matches(&Frame::text("ping")));
        assert!(!filter.matches(&Frame::close(Some(1000), "")));
    }

    #[rstest]
    #[case(PingPongFilterType::Ping, true)]
    #[case(PingPongFilterType::Pong, false)]
    #[case(PingPongFilterType::PingOrPong, true)]
    fn reply_default_follows_type(#[case] filter_type: PingPongFilterType, #[case] reply: bool) {
        let filter = PingPongFrameFilter::new("p", filter_type).expect("valid filter");
        assert_eq!(filter.replies_to_ping(), reply);
    }

    #[test]
    fn prepare_resets_pong_counter() {
        let mut filter = PingPongFrameFilter::new("p", PingPongFilterType::Ping).expect("valid");
        filter.pongs_sent = 3;
        filter.prepare();
        assert_eq!(filter.pongs_sent(), 0);
    }
}

//! WebSocket frame model consumed by the filter chain.
//!
//! Filters never mutate frames. They inspect the variant and payload to
//! decide whether to suppress it, and use [`Frame::kind`] plus the
//! [`Display`](std::fmt::Display) rendering when reporting discards.

use std::fmt;

use bytes::Bytes;

/// Kind of a [`Frame`], used as the type label in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// UTF-8 text data frame.
    Text,
    /// Binary data frame.
    Binary,
    /// Liveness probe.
    Ping,
    /// Answer to a liveness probe.
    Pong,
    /// Connection close frame.
    Close,
}

impl FrameKind {
    /// Returns the kind as a static string for reporting and logging.
    ///
    /// # Examples
    ///
    /// ```
    /// use frame_filter::frame::FrameKind;
    ///
    /// assert_eq!(FrameKind::Ping.as_str(), "ping");
    /// assert_eq!(FrameKind::Binary.as_str(), "binary");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
            Self::Ping => "ping",
            Self::Pong => "pong",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// One decoded protocol unit delivered by a [`Transport`](crate::Transport).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Text data frame.
    Text(String),
    /// Binary data frame.
    Binary(Bytes),
    /// Ping control frame with its application data.
    Ping(Bytes),
    /// Pong control frame with its application data.
    Pong(Bytes),
    /// Close control frame.
    Close {
        /// Status code, absent when the peer sent an empty close body.
        code: Option<u16>,
        /// Human-readable close reason.
        reason: String,
    },
}

impl Frame {
    /// Build a text frame.
    pub fn text(text: impl Into<String>) -> Self { Self::Text(text.into()) }

    /// Build a binary frame.
    pub fn binary(payload: impl Into<Bytes>) -> Self { Self::Binary(payload.into()) }

    /// Build a ping frame.
    pub fn ping(payload: impl Into<Bytes>) -> Self { Self::Ping(payload.into()) }

    /// Build a pong frame.
    pub fn pong(payload: impl Into<Bytes>) -> Self { Self::Pong(payload.into()) }

    /// Build a close frame.
    pub fn close(code: Option<u16>, reason: impl Into<String>) -> Self {
        Self::Close {
            code,
            reason: reason.into(),
        }
    }

    /// Build the pong answering `self`, echoing its application data.
    ///
    /// Returns `None` when `self` is not a ping.
    ///
    /// # Examples
    ///
    /// ```
    /// use frame_filter::Frame;
    ///
    /// let ping = Frame::ping(&b"abc"[..]);
    /// assert_eq!(ping.pong_reply(), Some(Frame::pong(&b"abc"[..])));
    /// assert_eq!(Frame::text("x").pong_reply(), None);
    /// ```
    #[must_use]
    pub fn pong_reply(&self) -> Option<Self> {
        match self {
            Self::Ping(payload) => Some(Self::Pong(payload.clone())),
            _ => None,
        }
    }

    /// Returns the frame's kind.
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Text(_) => FrameKind::Text,
            Self::Binary(_) => FrameKind::Binary,
            Self::Ping(_) => FrameKind::Ping,
            Self::Pong(_) => FrameKind::Pong,
            Self::Close { .. } => FrameKind::Close,
        }
    }

    /// Type label used in reports, e.g. `"ping"`.
    #[must_use]
    pub fn type_label(&self) -> &'static str { self.kind().as_str() }

    /// Text content, when this is a text frame.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Binary payload, when this is a binary frame.
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(payload) => Some(payload),
            _ => None,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "text frame with text '{text}'"),
            Self::Binary(payload) => {
                write!(f, "binary frame with payload 0x{}", hex::encode(payload))
            }
            Self::Ping(payload) => {
                write!(f, "ping frame with payload 0x{}", hex::encode(payload))
            }
            Self::Pong(payload) => {
                write!(f, "pong frame with payload 0x{}", hex::encode(payload))
            }
            Self::Close {
                code: Some(code),
                reason,
            } => write!(f, "close frame with close code {code} and reason '{reason}'"),
            Self::Close { code: None, .. } => f.write_str("close frame without close status"),
        }
    }
}

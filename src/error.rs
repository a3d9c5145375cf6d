//! Canonical error and result types for the crate.
//!
//! [`TransportError`] is the single failure surface of a receive call: the
//! transport raises it and filter nodes propagate it untouched, synthesising
//! only [`TransportError::Timeout`] themselves. [`FilterConfigError`] covers
//! filter construction.

use std::io;

use thiserror::Error;

/// Failure raised while receiving or replying to frames.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No acceptable frame arrived within the read timeout.
    #[error("read timed out")]
    Timeout,

    /// The peer closed the connection.
    #[error("connection closed")]
    Closed,

    /// Underlying socket failure.
    #[error("transport I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bytes were received but did not decode into a frame.
    #[error("frame decode error: {0}")]
    Decode(String),
}

impl TransportError {
    /// Returns true if this error represents an exhausted read timeout.
    ///
    /// I/O errors of kind [`io::ErrorKind::TimedOut`] and
    /// [`io::ErrorKind::WouldBlock`] count as timeouts, matching how
    /// blocking sockets report an elapsed read timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout => true,
            Self::Io(error) => matches!(
                error.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            ),
            Self::Closed | Self::Decode(_) => false,
        }
    }
}

/// Errors raised when constructing a filter from its settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterConfigError {
    /// Filters need a name for reporting and chain rendering.
    #[error("filter name must not be empty")]
    EmptyName,

    /// A regex comparison was configured with an invalid pattern.
    #[error("invalid regex pattern '{pattern}': {error}")]
    InvalidRegex {
        /// Pattern as configured.
        pattern: String,
        /// Compiler diagnostic.
        error: String,
    },

    /// A binary match value was not valid hexadecimal.
    #[error("invalid hex match value '{value}'")]
    InvalidHex {
        /// Value as configured.
        value: String,
    },

    /// The comparison does not apply to this filter's frame kind.
    #[error("comparison '{comparison}' is not supported by {filter} filters")]
    UnsupportedComparison {
        /// Comparison as configured.
        comparison: &'static str,
        /// Filter family rejecting it.
        filter: &'static str,
    },
}

/// Canonical result alias used by receive operations.
pub type Result<T> = std::result::Result<T, TransportError>;

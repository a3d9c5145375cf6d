//! Filter hiding binary frames by payload.

use bytes::Bytes;

use super::{ComparisonType, FrameFilter};
use crate::{error::FilterConfigError, frame::Frame};

/// Discards binary frames whose payload satisfies a [`ComparisonType`].
///
/// With a `match_position`, [`ComparisonType::Contains`] only matches when
/// the value occurs at exactly that byte offset. Frames of any other kind
/// always pass.
///
/// # Examples
///
/// ```
/// use frame_filter::{BinaryFrameFilter, ComparisonType, Frame, FrameFilter};
///
/// let filter =
///     BinaryFrameFilter::new("keepalive", ComparisonType::StartsWith, "0x00 0x01", None)?;
/// assert!(filter.matches(&Frame::binary(vec![0x00, 0x01, 0x7f])));
/// assert!(!filter.matches(&Frame::binary(vec![0x01])));
/// # Ok::<(), frame_filter::FilterConfigError>(())
/// ```
#[derive(Debug)]
pub struct BinaryFrameFilter {
    name: String,
    comparison: ComparisonType,
    value: Bytes,
    match_position: Option<usize>,
}

impl BinaryFrameFilter {
    /// Create a filter comparing payloads against the hex-encoded
    /// `match_value`.
    ///
    /// The value may be written as one hex string or as whitespace or comma
    /// separated bytes, each optionally prefixed with `0x`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterConfigError::InvalidHex`] when `match_value` is not
    /// valid hex, and the errors of [`BinaryFrameFilter::from_bytes`].
    pub fn new(
        name: impl Into<String>,
        comparison: ComparisonType,
        match_value: &str,
        match_position: Option<usize>,
    ) -> Result<Self, FilterConfigError> {
        let value = parse_hex(match_value)?;
        Self::from_bytes(name, comparison, value, match_position)
    }

    /// Create a filter comparing payloads against `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterConfigError::EmptyName`] for an empty name and
    /// [`FilterConfigError::UnsupportedComparison`] for the regex modes.
    pub fn from_bytes(
        name: impl Into<String>,
        comparison: ComparisonType,
        value: impl Into<Bytes>,
        match_position: Option<usize>,
    ) -> Result<Self, FilterConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FilterConfigError::EmptyName);
        }
        if comparison.is_regex() {
            return Err(FilterConfigError::UnsupportedComparison {
                comparison: comparison.as_str(),
                filter: "binary",
            });
        }
        Ok(Self {
            name,
            comparison,
            value: value.into(),
            match_position,
        })
    }

    fn payload_matches(&self, payload: &[u8]) -> bool {
        let value = self.value.as_ref();
        match self.comparison.positive() {
            ComparisonType::IsPlain => true,
            ComparisonType::Equals => payload == value,
            ComparisonType::StartsWith => payload.starts_with(value),
            ComparisonType::EndsWith => payload.ends_with(value),
            ComparisonType::Contains => match self.match_position {
                Some(position) => position
                    .checked_add(value.len())
                    .and_then(|end| payload.get(position..end))
                    .is_some_and(|window| window == value),
                None => value.is_empty() || payload.windows(value.len()).any(|w| w == value),
            },
            _ => false,
        }
    }
}

fn parse_hex(match_value: &str) -> Result<Vec<u8>, FilterConfigError> {
    let digits: String = match_value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
        })
        .collect();
    hex::decode(digits).map_err(|_| FilterConfigError::InvalidHex {
        value: match_value.to_owned(),
    })
}

impl FrameFilter for BinaryFrameFilter {
    fn name(&self) -> &str { &self.name }

    fn matches(&self, frame: &Frame) -> bool {
        frame
            .as_binary()
            .is_some_and(|payload| self.payload_matches(payload) != self.comparison.is_negated())
    }
}

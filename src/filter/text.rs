//! Filter hiding text frames by content.

use regex::Regex;

use super::{ComparisonType, FrameFilter};
use crate::{error::FilterConfigError, frame::Frame};

#[derive(Debug)]
enum TextMatcher {
    Any,
    Literal(String),
    Pattern(Regex),
}

/// Discards text frames whose content satisfies a [`ComparisonType`].
///
/// Frames of any other kind always pass.
///
/// # Examples
///
/// ```
/// use frame_filter::{ComparisonType, Frame, FrameFilter, TextFrameFilter};
///
/// let filter = TextFrameFilter::new("heartbeats", ComparisonType::StartsWith, "hb:")?;
/// assert!(filter.matches(&Frame::text("hb:42")));
/// assert!(!filter.matches(&Frame::text("order placed")));
/// # Ok::<(), frame_filter::FilterConfigError>(())
/// ```
#[derive(Debug)]
pub struct TextFrameFilter {
    name: String,
    comparison: ComparisonType,
    matcher: TextMatcher,
}

impl TextFrameFilter {
    /// Create a filter comparing text content against `match_value`.
    ///
    /// For the regex modes `match_value` is compiled once here.
    ///
    /// # Errors
    ///
    /// Returns [`FilterConfigError::EmptyName`] for an empty name and
    /// [`FilterConfigError::InvalidRegex`] when a regex mode is given a
    /// pattern that does not compile.
    pub fn new(
        name: impl Into<String>,
        comparison: ComparisonType,
        match_value: impl Into<String>,
    ) -> Result<Self, FilterConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FilterConfigError::EmptyName);
        }
        let match_value = match_value.into();
        let matcher = match comparison.positive() {
            ComparisonType::IsPlain => TextMatcher::Any,
            ComparisonType::EqualsRegex => {
                TextMatcher::Pattern(compile(&format!("^(?:{match_value})$"), &match_value)?)
            }
            ComparisonType::ContainsRegex => {
                TextMatcher::Pattern(compile(&match_value, &match_value)?)
            }
            _ => TextMatcher::Literal(match_value),
        };
        Ok(Self {
            name,
            comparison,
            matcher,
        })
    }

    /// Create a filter discarding every text frame.
    ///
    /// # Errors
    ///
    /// Returns [`FilterConfigError::EmptyName`] for an empty name.
    pub fn any(name: impl Into<String>) -> Result<Self, FilterConfigError> {
        Self::new(name, ComparisonType::IsPlain, String::new())
    }

    fn content_matches(&self, text: &str) -> bool {
        match &self.matcher {
            TextMatcher::Any => true,
            TextMatcher::Pattern(regex) => regex.is_match(text),
            TextMatcher::Literal(value) => match self.comparison.positive() {
                ComparisonType::Equals => text == value.as_str(),
                ComparisonType::Contains => text.contains(value.as_str()),
                ComparisonType::StartsWith => text.starts_with(value.as_str()),
                ComparisonType::EndsWith => text.ends_with(value.as_str()),
                _ => false,
            },
        }
    }
}

fn compile(pattern: &str, configured: &str) -> Result<Regex, FilterConfigError> {
    Regex::new(pattern).map_err(|e| FilterConfigError::InvalidRegex {
        pattern: configured.to_owned(),
        error: e.to_string(),
    })
}

impl FrameFilter for TextFrameFilter {
    fn name(&self) -> &str { &self.name }

    fn matches(&self, frame: &Frame) -> bool {
        frame
            .as_text()
            .is_some_and(|text| self.content_matches(text) != self.comparison.is_negated())
    }
}

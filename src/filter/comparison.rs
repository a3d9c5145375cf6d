//! Comparison modes shared by the text and binary filters.

use serde::{Deserialize, Serialize};

/// How a data frame's content is compared against a filter's match value.
///
/// `IsPlain` matches every frame of the filter's kind regardless of content.
/// Each `Not*` mode matches frames of the filter's kind for which the
/// corresponding positive mode does not match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonType {
    /// Any frame of the filter's kind.
    #[default]
    IsPlain,
    /// Content equals the match value.
    Equals,
    /// Content contains the match value.
    Contains,
    /// Content starts with the match value.
    StartsWith,
    /// Content ends with the match value.
    EndsWith,
    /// Content is entirely matched by the regex.
    EqualsRegex,
    /// Content contains a match of the regex.
    ContainsRegex,
    /// Negation of [`ComparisonType::Equals`].
    NotEquals,
    /// Negation of [`ComparisonType::Contains`].
    NotContains,
    /// Negation of [`ComparisonType::StartsWith`].
    NotStartsWith,
    /// Negation of [`ComparisonType::EndsWith`].
    NotEndsWith,
    /// Negation of [`ComparisonType::EqualsRegex`].
    NotEqualsRegex,
    /// Negation of [`ComparisonType::ContainsRegex`].
    NotContainsRegex,
}

impl ComparisonType {
    /// Returns the mode name as used in configuration files.
    ///
    /// # Examples
    ///
    /// ```
    /// use frame_filter::ComparisonType;
    ///
    /// assert_eq!(ComparisonType::NotStartsWith.as_str(), "not_starts_with");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IsPlain => "is_plain",
            Self::Equals => "equals",
            Self::Contains => "contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::EqualsRegex => "equals_regex",
            Self::ContainsRegex => "contains_regex",
            Self::NotEquals => "not_equals",
            Self::NotContains => "not_contains",
            Self::NotStartsWith => "not_starts_with",
            Self::NotEndsWith => "not_ends_with",
            Self::NotEqualsRegex => "not_equals_regex",
            Self::NotContainsRegex => "not_contains_regex",
        }
    }

    /// Whether this is one of the `Not*` modes.
    #[must_use]
    pub const fn is_negated(self) -> bool {
        matches!(
            self,
            Self::NotEquals
                | Self::NotContains
                | Self::NotStartsWith
                | Self::NotEndsWith
                | Self::NotEqualsRegex
                | Self::NotContainsRegex
        )
    }

    /// The mode with any negation removed.
    #[must_use]
    pub const fn positive(self) -> Self {
        match self {
            Self::NotEquals => Self::Equals,
            Self::NotContains => Self::Contains,
            Self::NotStartsWith => Self::StartsWith,
            Self::NotEndsWith => Self::EndsWith,
            Self::NotEqualsRegex => Self::EqualsRegex,
            Self::NotContainsRegex => Self::ContainsRegex,
            other => other,
        }
    }

    /// Whether the match value is interpreted as a regular expression.
    #[must_use]
    pub const fn is_regex(self) -> bool {
        matches!(self.positive(), Self::EqualsRegex | Self::ContainsRegex)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ComparisonType;

    #[rstest]
    #[case(ComparisonType::NotEquals, ComparisonType::Equals)]
    #[case(ComparisonType::NotContainsRegex, ComparisonType::ContainsRegex)]
    #[case(ComparisonType::StartsWith, ComparisonType::StartsWith)]
    #[case(ComparisonType::IsPlain, ComparisonType::IsPlain)]
    fn positive_strips_negation(#[case] mode: ComparisonType, #[case] expected: ComparisonType) {
        assert_eq!(mode.positive(), expected);
        assert!(!mode.positive().is_negated());
    }

    #[test]
    fn regex_modes() {
        assert!(ComparisonType::EqualsRegex.is_regex());
        assert!(ComparisonType::NotContainsRegex.is_regex());
        assert!(!ComparisonType::Contains.is_regex());
    }

    #[test]
    fn deserialises_snake_case_names() {
        let mode: ComparisonType =
            serde_json::from_str("\"not_ends_with\"").expect("valid comparison");
        assert_eq!(mode, ComparisonType::NotEndsWith);
    }
}

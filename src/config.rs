//! Declarative filter chain definitions.
//!
//! A [`ChainConfig`] lists filter settings in traversal order and can be
//! deserialised with `serde`. Building it compiles regexes and parses hex
//! values up front, so a chain that builds never fails for configuration
//! reasons while frames are flowing.
//!
//! ```
//! use frame_filter::config::ChainConfig;
//!
//! let config: ChainConfig = serde_json::from_str(
//!     r#"{ "filters": [
//!         { "type": "ping_pong", "name": "probes" },
//!         { "type": "text", "name": "heartbeats",
//!           "comparison": "starts_with", "match_value": "hb:" }
//!     ] }"#,
//! )?;
//! let chain = config.build()?;
//! assert_eq!(
//!     chain.to_string(),
//!     "Frame Filter 'probes' -> Frame Filter 'heartbeats'"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{fmt, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    error::FilterConfigError,
    filter::{
        BinaryFrameFilter,
        ComparisonType,
        FilterChain,
        PingPongFilterType,
        PingPongFrameFilter,
        SharedFilter,
        TextFrameFilter,
        shared,
    },
};

/// Settings for one filter, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    /// Settings for a [`PingPongFrameFilter`].
    PingPong {
        /// Filter name.
        name: String,
        /// Control frame kinds to hide.
        #[serde(default)]
        filter_type: PingPongFilterType,
        /// Answer discarded pings; defaults to the filter type's default.
        #[serde(default)]
        reply_to_ping: Option<bool>,
    },
    /// Settings for a [`TextFrameFilter`].
    Text {
        /// Filter name.
        name: String,
        /// Comparison mode.
        #[serde(default)]
        comparison: ComparisonType,
        /// Literal value or regex pattern.
        #[serde(default)]
        match_value: String,
    },
    /// Settings for a [`BinaryFrameFilter`].
    Binary {
        /// Filter name.
        name: String,
        /// Comparison mode.
        #[serde(default)]
        comparison: ComparisonType,
        /// Hex-encoded byte value.
        #[serde(default)]
        match_value: String,
        /// Exact offset for `contains` comparisons.
        #[serde(default)]
        match_position: Option<usize>,
    },
}

impl FilterConfig {
    /// Name of the configured filter.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::PingPong { name, .. } | Self::Text { name, .. } | Self::Binary { name, .. } => {
                name
            }
        }
    }

    /// Construct the configured filter.
    ///
    /// # Errors
    ///
    /// Returns the construction error of the underlying filter type.
    pub fn build(&self) -> Result<SharedFilter, FilterConfigError> {
        Ok(match self {
            Self::PingPong {
                name,
                filter_type,
                reply_to_ping,
            } => {
                let filter = PingPongFrameFilter::new(name.as_str(), *filter_type)?;
                let reply = reply_to_ping.unwrap_or(filter.replies_to_ping());
                shared(filter.with_reply_to_ping(reply))
            }
            Self::Text {
                name,
                comparison,
                match_value,
            } => shared(TextFrameFilter::new(
                name.as_str(),
                *comparison,
                match_value.as_str(),
            )?),
            Self::Binary {
                name,
                comparison,
                match_value,
                match_position,
            } => shared(BinaryFrameFilter::new(
                name.as_str(),
                *comparison,
                match_value,
                *match_position,
            )?),
        })
    }
}

impl fmt::Display for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PingPong {
                name,
                filter_type,
                reply_to_ping,
            } => write!(
                f,
                "{name}: ping/pong filter ({filter_type:?}, reply_to_ping={reply_to_ping:?})"
            ),
            Self::Text {
                name,
                comparison,
                match_value,
            } => write!(f, "{name}: text filter ({} '{match_value}')", comparison.as_str()),
            Self::Binary {
                name,
                comparison,
                match_value,
                match_position,
            } => write!(
                f,
                "{name}: binary filter ({} '{match_value}', position={match_position:?})",
                comparison.as_str()
            ),
        }
    }
}

/// Ordered list of filter settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Filters in traversal order; the first entry becomes the chain head.
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

impl ChainConfig {
    /// Build a chain timed by the system clock.
    ///
    /// # Errors
    ///
    /// Returns the first filter construction error encountered.
    pub fn build(&self) -> Result<FilterChain, FilterConfigError> {
        self.populate(FilterChain::new())
    }

    /// Build a chain timed by `clock`.
    ///
    /// # Errors
    ///
    /// Returns the first filter construction error encountered.
    pub fn build_with_clock(&self, clock: Rc<dyn Clock>) -> Result<FilterChain, FilterConfigError> {
        self.populate(FilterChain::with_clock(clock))
    }

    fn populate(&self, mut chain: FilterChain) -> Result<FilterChain, FilterConfigError> {
        for filter in &self.filters {
            chain.append(filter.build()?);
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::{ChainConfig, FilterConfig};
    use crate::{
        error::FilterConfigError,
        filter::{ComparisonType, PingPongFilterType},
        frame::Frame,
    };

    #[test]
    fn ping_pong_defaults() {
        let config: FilterConfig =
            serde_json::from_str(r#"{"type": "ping_pong", "name": "p"}"#).expect("valid config");
        assert_eq!(
            config,
            FilterConfig::PingPong {
                name: "p".into(),
                filter_type: PingPongFilterType::PingOrPong,
                reply_to_ping: None,
            }
        );
        let filter = config.build().expect("valid filter");
        assert!(filter.borrow().matches(&Frame::pong(Bytes::new())));
    }

    #[test]
    fn binary_settings_are_parsed() {
        let config: FilterConfig = serde_json::from_str(
            r#"{"type": "binary", "name": "b", "comparison": "contains",
                "match_value": "0x01 0x02", "match_position": 2}"#,
        )
        .expect("valid config");
        let filter = config.build().expect("valid filter");
        assert!(filter.borrow().matches(&Frame::binary(vec![0, 0, 1, 2])));
        assert!(!filter.borrow().matches(&Frame::binary(vec![1, 2, 0, 0])));
    }

    #[test]
    fn chain_preserves_order() {
        let config = ChainConfig {
            filters: vec![
                FilterConfig::Text {
                    name: "first".into(),
                    comparison: ComparisonType::IsPlain,
                    match_value: String::new(),
                },
                FilterConfig::PingPong {
                    name: "second".into(),
                    filter_type: PingPongFilterType::Ping,
                    reply_to_ping: Some(false),
                },
            ],
        };
        let chain = config.build().expect("valid chain");
        assert_eq!(chain.filter_names(), ["first", "second"]);
    }

    #[test]
    fn invalid_filter_fails_the_chain() {
        let config = ChainConfig {
            filters: vec![FilterConfig::Text {
                name: String::new(),
                comparison: ComparisonType::Equals,
                match_value: "x".into(),
            }],
        };
        assert_eq!(
            config.build().expect_err("empty name"),
            FilterConfigError::EmptyName
        );
    }

    #[test]
    fn empty_config_builds_empty_chain() {
        let config: ChainConfig = serde_json::from_str("{}").expect("valid config");
        assert!(config.build().expect("valid chain").is_empty());
    }
}

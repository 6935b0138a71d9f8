//! Path pattern expressions.
//!
//! # Syntax
//! ```text
//! /users/_        one literal segment, one wildcard segment
//! /users/_/       same, but the subject must also end with '/'
//! /               the root path only
//! ```
//!
//! # Design Decisions
//! - `_` is the only wildcard; it matches exactly one segment
//! - Literal segments compare byte-for-byte (no decoding, no case folding)
//! - Trailing slash is part of the match
//! - Expressions without a leading '/' never match anything

use std::fmt;
use std::str::FromStr;

use crate::routing::matcher::PathMatcher;

/// Wildcard token matching any single segment.
pub const WILDCARD: &str = "_";

/// Split a path remainder into segments.
///
/// Trailing empty elements are dropped, so `"a/b/"` yields `["a", "b"]` and
/// `"/"` yields nothing. An empty input yields a single empty segment.
pub(crate) fn split_segments(rest: &str) -> Vec<&str> {
    if rest.is_empty() {
        return vec![""];
    }

    let mut parts: Vec<&str> = rest.split('/').collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    parts
}

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// `_`: matches any single segment.
    Wildcard,
    /// Must equal the subject segment exactly.
    Literal(String),
}

impl PatternSegment {
    fn matches(&self, segment: &str) -> bool {
        match self {
            PatternSegment::Wildcard => true,
            PatternSegment::Literal(literal) => literal == segment,
        }
    }
}

/// A parsed pattern expression, reusable across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    expression: String,
    segments: Vec<PatternSegment>,
    trailing_slash: bool,
}

/// Returned by [`PathPattern::from_str`] for expressions without a leading '/'.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid path pattern '{0}': must start with '/'")]
pub struct InvalidPattern(pub String);

impl PathPattern {
    /// Parse an expression. Returns `None` if it does not start with '/'.
    pub fn parse(expression: &str) -> Option<Self> {
        let rest = expression.strip_prefix('/')?;
        let segments = split_segments(rest)
            .into_iter()
            .map(|part| {
                if part == WILDCARD {
                    PatternSegment::Wildcard
                } else {
                    PatternSegment::Literal(part.to_string())
                }
            })
            .collect();

        Some(Self {
            expression: expression.to_string(),
            segments,
            trailing_slash: expression.ends_with('/'),
        })
    }

    /// The expression this pattern was parsed from.
    pub fn as_str(&self) -> &str {
        &self.expression
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Full-path match against a subject: equal segment count, equal
    /// trailing-slash state, and every segment either wildcard or equal.
    pub fn matches(&self, subject: &PathMatcher) -> bool {
        if self.segments.len() != subject.len() {
            return false;
        }

        if self.trailing_slash != subject.has_trailing_slash() {
            return false;
        }

        self.segments
            .iter()
            .zip(subject.segments())
            .all(|(pattern, segment)| pattern.matches(segment))
    }
}

impl FromStr for PathPattern {
    type Err = InvalidPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidPattern(s.to_string()))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

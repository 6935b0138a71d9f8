//! Request path matching.
//!
//! # Responsibilities
//! - Split a request path into segments once per request
//! - Answer method predicates (exact, case-sensitive)
//! - Match `_`-wildcard pattern expressions against the path
//! - Combine conditions with AND semantics for the router
//!
//! # Design Decisions
//! - Method matching is case-sensitive, no normalization
//! - Path matching is case-sensitive and full-path (both ends anchored)
//! - Trailing slash is significant
//! - No regex; matching is O(segments)

use thiserror::Error;

use crate::routing::pattern::{split_segments, PathPattern};

/// Errors from segment access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Requested position does not address an existing segment.
    #[error("segment {pos} does not exist (path has {len} segments)")]
    OutOfRange { pos: usize, len: usize },
}

/// Method and path of one request, split into segments.
///
/// Immutable once built; share freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    method: String,
    segments: Vec<String>,
    trailing_slash: bool,
}

impl PathMatcher {
    /// Build from a method token and a URI path (no scheme, host or query).
    ///
    /// The leading '/' is stripped if present; a path without one is split
    /// as-is rather than losing its first character.
    pub fn new(method: impl Into<String>, uri: &str) -> Self {
        let rest = uri.strip_prefix('/').unwrap_or(uri);
        let segments = split_segments(rest)
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            method: method.into(),
            segments,
            trailing_slash: uri.ends_with('/'),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Segment at `pos`, or `OutOfRange` when `pos >= len()`.
    pub fn get(&self, pos: usize) -> Result<&str, SegmentError> {
        self.segments
            .get(pos)
            .map(String::as_str)
            .ok_or(SegmentError::OutOfRange {
                pos,
                len: self.segments.len(),
            })
    }

    pub fn is_method(&self, method: &str) -> bool {
        self.method == method
    }

    pub fn is_get(&self) -> bool {
        self.is_method("GET")
    }

    pub fn is_put(&self) -> bool {
        self.is_method("PUT")
    }

    pub fn is_post(&self) -> bool {
        self.is_method("POST")
    }

    /// Check the path against a pattern expression such as `/users/_`.
    ///
    /// ```text
    /// path /users/123
    ///   /users/_   true
    ///   /users/_/  false
    ///   /_/123     true
    ///   /_/_/      false
    /// ```
    ///
    /// Expressions that do not start with '/' match nothing.
    pub fn is_path(&self, expression: &str) -> bool {
        PathPattern::parse(expression).is_some_and(|pattern| pattern.matches(self))
    }

    /// Method check first, then pattern.
    pub fn is_method_path(&self, method: &str, expression: &str) -> bool {
        self.is_method(method) && self.is_path(expression)
    }

    pub fn is_get_path(&self, expression: &str) -> bool {
        self.is_get() && self.is_path(expression)
    }

    pub fn is_put_path(&self, expression: &str) -> bool {
        self.is_put() && self.is_path(expression)
    }

    pub fn is_post_path(&self, expression: &str) -> bool {
        self.is_post() && self.is_path(expression)
    }
}

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &PathMatcher) -> bool;
}

/// Matches the request method exactly.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    method: String,
}

impl MethodMatcher {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, req: &PathMatcher) -> bool {
        req.is_method(&self.method)
    }
}

/// Matches the request path against a compiled pattern.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: PathPattern,
}

impl PatternMatcher {
    pub fn new(pattern: PathPattern) -> Self {
        Self { pattern }
    }
}

impl Matcher for PatternMatcher {
    fn matches(&self, req: &PathMatcher) -> bool {
        self.pattern.matches(req)
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, req: &PathMatcher) -> bool {
        // Evaluated in order; put cheap checks first
        self.matchers.iter().all(|m| m.matches(req))
    }
}

//! Boundary between HTTP requests and the path matcher.
//!
//! # Responsibilities
//! - Extract routing-relevant information (method, path)
//!
//! # Design Decisions
//! - Only the path component is used; query string is ignored
//! - Method is passed through verbatim

use axum::http::Request;

use crate::routing::PathMatcher;

/// Build a matcher from an inbound request.
pub fn from_request<B>(req: &Request<B>) -> PathMatcher {
    PathMatcher::new(req.method().as_str(), req.uri().path())
}

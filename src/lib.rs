//! Request path matching with `_` wildcards.

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::RouteMatcherConfig;
pub use http::HttpServer;
pub use routing::{PathMatcher, PathPattern, Router, SegmentError};

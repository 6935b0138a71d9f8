//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing layer)
//!     → request.rs (method + path → PathMatcher)
//!     → routing::Router (first matching route)
//!     → response.rs (JSON decision, 200 or 404)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::from_request;
pub use response::{NoRoute, RouteMatch};
pub use server::HttpServer;

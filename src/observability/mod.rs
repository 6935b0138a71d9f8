//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, http, config
//!     → logging.rs (structured log events via tracing)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → matcher.rs (split path into segments once)
//!     → router.rs (route lookup)
//!     → pattern.rs (evaluate `_`-wildcard patterns)
//!     → Return: matched Route or None
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Parse patterns
//!     → Sort by priority
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex; `_` is the only wildcard
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by priority)

pub mod matcher;
pub mod pattern;
pub mod router;

pub use matcher::{PathMatcher, SegmentError};
pub use pattern::{InvalidPattern, PathPattern, PatternSegment};
pub use router::{Route, Router};

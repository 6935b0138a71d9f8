//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Route names present and unique
//! - Patterns well-formed (leading '/')
//! - Bind address parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteMatcherConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RouteMatcherConfig;
use crate::routing::PathPattern;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyRouteName { index: usize },

    #[error("duplicate route name '{0}'")]
    DuplicateRouteName(String),

    #[error("route '{route}' has invalid pattern '{pattern}': must start with '/'")]
    InvalidPattern { route: String, pattern: String },

    #[error("route '{0}' has an empty method")]
    EmptyMethod(String),

    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),
}

/// Check the configuration, collecting every problem found.
pub fn validate_config(config: &RouteMatcherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyRouteName { index });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRouteName(route.name.clone()));
        }

        if PathPattern::parse(&route.pattern).is_none() {
            errors.push(ValidationError::InvalidPattern {
                route: route.name.clone(),
                pattern: route.pattern.clone(),
            });
        }

        if route.method.as_deref() == Some("") {
            errors.push(ValidationError::EmptyMethod(route.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

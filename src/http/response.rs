//! Response bodies for routing decisions.
//!
//! # Design Decisions
//! - JSON bodies so clients can inspect the decision
//! - No match maps to 404 Not Found

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::routing::{PathMatcher, Route};

/// Body returned when a route matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub route: String,
    pub method: String,
    pub segments: Vec<String>,
}

impl RouteMatch {
    pub fn new(route: &Route, req: &PathMatcher) -> Self {
        Self {
            route: route.name().to_string(),
            method: req.method().to_string(),
            segments: req.segments().to_vec(),
        }
    }
}

impl IntoResponse for RouteMatch {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Body returned when no route matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoRoute {
    pub error: String,
    pub method: String,
    pub path: String,
}

impl NoRoute {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            error: "no matching route".to_string(),
            method: method.to_string(),
            path: path.to_string(),
        }
    }
}

impl IntoResponse for NoRoute {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(self)).into_response()
    }
}

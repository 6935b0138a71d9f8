//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up matching route for request
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over routes (acceptable for typical route counts)
//! - Higher priority checked first; ties keep declaration order
//! - Explicit `None` rather than silent default

use crate::config::RouteConfig;
use crate::routing::matcher::{AndMatcher, Matcher, MethodMatcher, PathMatcher, PatternMatcher};
use crate::routing::pattern::PathPattern;

/// A compiled route.
#[derive(Debug)]
pub struct Route {
    name: String,
    method: Option<String>,
    pattern: PathPattern,
    priority: u32,
    matcher: AndMatcher,
}

impl Route {
    /// Compile a route. Method is checked before the pattern.
    pub fn new(
        name: impl Into<String>,
        method: Option<String>,
        pattern: PathPattern,
        priority: u32,
    ) -> Self {
        let mut matchers: Vec<Box<dyn Matcher>> = Vec::with_capacity(2);
        if let Some(method) = &method {
            matchers.push(Box::new(MethodMatcher::new(method.clone())));
        }
        matchers.push(Box::new(PatternMatcher::new(pattern.clone())));

        Self {
            name: name.into(),
            method,
            pattern,
            priority,
            matcher: AndMatcher::new(matchers),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` matches any method.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn matches(&self, req: &PathMatcher) -> bool {
        self.matcher.matches(req)
    }
}

/// Ordered route table.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build from already compiled routes.
    pub fn new(mut routes: Vec<Route>) -> Self {
        // Stable sort keeps declaration order among equal priorities
        routes.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { routes }
    }

    /// Compile route definitions. Definitions whose pattern does not parse
    /// are skipped with a warning.
    pub fn from_config(configs: Vec<RouteConfig>) -> Self {
        let routes: Vec<Route> = configs
            .into_iter()
            .filter_map(|config| match PathPattern::parse(&config.pattern) {
                Some(pattern) => Some(Route::new(
                    config.name,
                    config.method,
                    pattern,
                    config.priority,
                )),
                None => {
                    tracing::warn!(
                        route = %config.name,
                        pattern = %config.pattern,
                        "Skipping route with invalid pattern"
                    );
                    None
                }
            })
            .collect();

        tracing::info!(routes = routes.len(), "Routes compiled");
        Self::new(routes)
    }

    /// First route matching the request, in priority order.
    pub fn match_request(&self, req: &PathMatcher) -> Option<&Route> {
        let matched = self.routes.iter().find(|route| route.matches(req));

        match matched {
            Some(route) => tracing::debug!(
                method = %req.method(),
                route = %route.name(),
                "Route matched"
            ),
            None => tracing::debug!(
                method = %req.method(),
                segments = req.len(),
                "No route matched"
            ),
        }

        matched
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(name: &str, method: Option<&str>, pattern: &str, priority: u32) -> RouteConfig {
        RouteConfig {
            name: name.into(),
            method: method.map(Into::into),
            pattern: pattern.into(),
            priority,
        }
    }

    #[test]
    fn test_first_match_wins() {
        let router = Router::from_config(vec![
            route("list-users", Some("GET"), "/users", 0),
            route("get-user", Some("GET"), "/users/_", 0),
            route("any-user", None, "/users/_", 0),
        ]);

        let req = PathMatcher::new("GET", "/users/7");
        assert_eq!(router.match_request(&req).unwrap().name(), "get-user");

        let req = PathMatcher::new("DELETE", "/users/7");
        assert_eq!(router.match_request(&req).unwrap().name(), "any-user");

        let req = PathMatcher::new("GET", "/users");
        assert_eq!(router.match_request(&req).unwrap().name(), "list-users");
    }

    #[test]
    fn test_priority_ordering() {
        let router = Router::from_config(vec![
            route("wildcard", None, "/_/_", 0),
            route("specific", None, "/users/me", 10),
        ]);

        assert_eq!(router.routes()[0].name(), "specific");

        let req = PathMatcher::new("GET", "/users/me");
        assert_eq!(router.match_request(&req).unwrap().name(), "specific");

        let req = PathMatcher::new("GET", "/users/42");
        assert_eq!(router.match_request(&req).unwrap().name(), "wildcard");
    }

    #[test]
    fn test_no_match() {
        let router = Router::from_config(vec![route("create-user", Some("POST"), "/users/", 0)]);

        assert!(router.match_request(&PathMatcher::new("POST", "/users")).is_none());
        assert!(router.match_request(&PathMatcher::new("GET", "/users/")).is_none());
        assert!(router.match_request(&PathMatcher::new("POST", "/users/")).is_some());
    }

    #[test]
    fn test_invalid_pattern_skipped() {
        let router = Router::from_config(vec![
            route("bad", None, "users/_", 0),
            route("good", None, "/users/_", 0),
        ]);

        assert_eq!(router.len(), 1);
        assert_eq!(router.routes()[0].name(), "good");
    }

    #[test]
    fn test_empty_router() {
        let router = Router::default();
        assert!(router.is_empty());
        assert!(router.match_request(&PathMatcher::new("GET", "/")).is_none());
    }

    #[test]
    fn test_route_accessors() {
        let route = Route::new("r", Some("PUT".into()), "/a/_".parse().unwrap(), 3);
        assert_eq!(route.name(), "r");
        assert_eq!(route.method(), Some("PUT"));
        assert_eq!(route.pattern().as_str(), "/a/_");
        assert_eq!(route.priority(), 3);
    }
}

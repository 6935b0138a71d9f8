//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a catch-all handler
//! - Wire up middleware (tracing)
//! - Bind server to listener
//! - Dispatch requests to routing engine and report the decision

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::RouteMatcherConfig;
use crate::http::request::from_request;
use crate::http::response::{NoRoute, RouteMatch};
use crate::routing::Router as RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server answering every request with its routing decision.
pub struct HttpServer {
    router: Router,
    routes: Arc<RouteTable>,
    config: RouteMatcherConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RouteMatcherConfig) -> Self {
        let routes = Arc::new(RouteTable::from_config(config.routes.clone()));
        let router = Self::build_router(AppState {
            routes: routes.clone(),
        });
        Self {
            router,
            routes,
            config,
        }
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(route_handler)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The axum service, for driving requests in-process.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Compiled route table; invalid patterns are not in it.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RouteMatcherConfig {
        &self.config
    }
}

/// Match the request against the route table.
async fn route_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let req = from_request(&request);

    match state.routes.match_request(&req) {
        Some(route) => RouteMatch::new(route, &req).into_response(),
        None => {
            let path = request.uri().path();
            tracing::warn!(method = %req.method(), path = %path, "No route matched");
            NoRoute::new(req.method(), path).into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteConfig;

    #[test]
    fn test_routes_counts_compiled_only() {
        let mut config = RouteMatcherConfig::default();
        config.routes.push(RouteConfig {
            name: "good".into(),
            method: None,
            pattern: "/users/_".into(),
            priority: 0,
        });
        config.routes.push(RouteConfig {
            name: "bad".into(),
            method: None,
            pattern: "users".into(),
            priority: 0,
        });

        let server = HttpServer::new(config);
        assert_eq!(server.config().routes.len(), 2);
        assert_eq!(server.routes().len(), 1);
        assert_eq!(server.routes().routes()[0].name(), "good");
    }
}

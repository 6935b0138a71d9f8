//! In-process tests for the routing HTTP service.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use route_matcher::config::parse_config;
use route_matcher::http::{HttpServer, NoRoute, RouteMatch};

const CONFIG: &str = r#"
[[routes]]
name = "get-user"
method = "GET"
pattern = "/users/_"

[[routes]]
name = "create-user"
method = "POST"
pattern = "/users/"

[[routes]]
name = "me"
pattern = "/users/me"
priority = 10
"#;

async fn send(method: &str, uri: &str) -> (StatusCode, axum::body::Bytes) {
    let config = parse_config(CONFIG).unwrap();
    let app = HttpServer::new(config).into_router();

    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

#[tokio::test]
async fn test_matched_route() {
    let (status, body) = send("GET", "/users/42").await;
    assert_eq!(status, StatusCode::OK);

    let decision: RouteMatch = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        decision,
        RouteMatch {
            route: "get-user".into(),
            method: "GET".into(),
            segments: vec!["users".into(), "42".into()],
        }
    );
}

#[tokio::test]
async fn test_priority_route_wins() {
    let (status, body) = send("GET", "/users/me").await;
    assert_eq!(status, StatusCode::OK);

    let decision: RouteMatch = serde_json::from_slice(&body).unwrap();
    assert_eq!(decision.route, "me");
}

#[tokio::test]
async fn test_trailing_slash_selects_route() {
    let (status, body) = send("POST", "/users/").await;
    assert_eq!(status, StatusCode::OK);

    let decision: RouteMatch = serde_json::from_slice(&body).unwrap();
    assert_eq!(decision.route, "create-user");

    let (status, _) = send("POST", "/users").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_query_string_ignored() {
    let (status, body) = send("GET", "/users/42?expand=true").await;
    assert_eq!(status, StatusCode::OK);

    let decision: RouteMatch = serde_json::from_slice(&body).unwrap();
    assert_eq!(decision.segments, vec!["users", "42"]);
}

#[tokio::test]
async fn test_no_matching_route() {
    let (status, body) = send("PUT", "/users/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: NoRoute = serde_json::from_slice(&body).unwrap();
    assert_eq!(error, NoRoute::new("PUT", "/users/42"));
}

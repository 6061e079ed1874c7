use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use std::sync::Arc;
use tower::ServiceExt;
use user_registry::{
    AppState, InMemoryUserRepository, RouteCounter, config::AppConfig, create_router,
    models::MessageResponse,
};

// Drives the real router in-process via tower's oneshot, so the auth layer is
// exercised exactly as deployed, without a TCP listener.

fn test_router() -> Router {
    let state = AppState {
        repo: Arc::new(InMemoryUserRepository::new()),
        metrics: Arc::new(RouteCounter::new()),
        config: AppConfig::default(),
    };
    create_router(state)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn every_api_route_rejects_a_missing_authorization_header() {
    let routes = [
        ("GET", "/users"),
        ("POST", "/users"),
        ("PUT", "/users/alice"),
        ("DELETE", "/users/alice"),
        ("GET", "/stats"),
    ];

    for (method, uri) in routes {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let (status, body) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);

        let message: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(message.message, "Access denied: authentication required.");
    }
}

#[tokio::test]
async fn token_comparison_is_exact_and_case_sensitive() {
    // Everything that is not the exact configured header value is rejected.
    let bad_headers = [
        "Bearer wrong",
        "bearer secret123",
        "Bearer secret123 ",
        " Bearer secret123",
        "secret123",
        "Bearer SECRET123",
        "",
    ];

    for value in bad_headers {
        let request = Request::builder()
            .method("GET")
            .uri("/users")
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "header {:?}", value);
    }
}

#[tokio::test]
async fn exact_token_passes_the_gate() {
    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .header(header::AUTHORIZATION, "Bearer secret123")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<user_registry::models::User> = serde_json::from_slice(&body).unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn health_stays_reachable_without_a_token() {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn rejected_requests_are_not_counted_by_the_route_tracker() {
    let state = AppState {
        repo: Arc::new(InMemoryUserRepository::new()),
        metrics: Arc::new(RouteCounter::new()),
        config: AppConfig::default(),
    };
    let router = create_router(state.clone());

    // Unauthorized hit: the gate runs before the counter.
    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap();
    assert_eq!(state.metrics.count("GET /users"), 0);

    // Authorized hit: counted against the route template.
    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .header(header::AUTHORIZATION, "Bearer secret123")
        .body(Body::empty())
        .unwrap();
    router.oneshot(request).await.unwrap();
    assert_eq!(state.metrics.count("GET /users"), 1);
}

use crate::AppState;
use axum::{Router, routing::get};

/// Public Router Module
///
/// The only routes reachable without a bearer token. Kept deliberately minimal:
/// the whole data surface lives behind the auth gate.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated liveness check for monitoring and load balancers.
        .route("/health", get(|| async { "ok" }))
}

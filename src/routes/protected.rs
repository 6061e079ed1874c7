use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, put},
};

/// Protected Router Module
///
/// The full API surface. This router is merged into the application behind the
/// `require_bearer` route layer (see `create_router`), so none of these handlers
/// can run without the exact shared-secret Authorization header.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        // GET /users — snapshot of every stored record, in insertion order.
        // POST /users — creates a record; validation and the duplicate-username
        // check happen before any mutation.
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        // PUT /users/{username} — replaces the usage of an existing record. The
        // username in the path is the only identity consulted; renaming is not
        // possible through this endpoint.
        // DELETE /users/{username} — removes a record.
        .route(
            "/users/{username}",
            put(handlers::update_user).delete(handlers::delete_user),
        )
        // GET /stats — per-route access counts collected since startup.
        .route("/stats", get(handlers::get_stats))
}

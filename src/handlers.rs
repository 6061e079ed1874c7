use crate::{
    AppState,
    error::ApiError,
    models::{MessageResponse, StatsResponse, UpdateUserRequest, User, UserUpdatedResponse},
    validator,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
};
use chrono::Utc;

// Every handler here sits behind the `require_bearer` route layer; by the time
// a request arrives, authentication has already passed.

/// list_users
///
/// Returns the store's full snapshot, in insertion order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 401, description = "Bad or missing token", body = MessageResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.repo.list().await)
}

/// create_user
///
/// Validates the candidate record, then attempts the insert. A duplicate
/// username fails with no mutation. On success the response carries the created
/// record and a Location header keyed by username.
#[utoipa::path(
    post,
    path = "/users",
    request_body = User,
    responses(
        (status = 201, description = "Created", body = User),
        (status = 400, description = "Invalid or duplicate", body = MessageResponse),
        (status = 401, description = "Bad or missing token", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<User>), ApiError> {
    // A body that does not deserialize into the expected shape is a validation
    // failure; it must never reach the store.
    let Json(user) =
        payload.map_err(|rejection| ApiError::Validation(vec![rejection.body_text()]))?;

    validator::validate_user(&user).map_err(ApiError::Validation)?;

    if !state.repo.add(user.clone()).await {
        return Err(ApiError::Conflict(user.username));
    }

    tracing::info!(username = %user.username, "user created");

    let location = format!("/users/{}", user.username);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user),
    ))
}

/// update_user
///
/// Replaces the `usage` of an existing record. Only the payload's `usage` field
/// is consulted — the target username comes from the path and a client-supplied
/// username would be ignored, so renaming is impossible by construction.
#[utoipa::path(
    put,
    path = "/users/{username}",
    request_body = UpdateUserRequest,
    params(("username" = String, Path, description = "Target username")),
    responses(
        (status = 200, description = "Updated", body = UserUpdatedResponse),
        (status = 400, description = "Invalid usage", body = MessageResponse),
        (status = 401, description = "Bad or missing token", body = MessageResponse),
        (status = 404, description = "Unknown username", body = MessageResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserUpdatedResponse>, ApiError> {
    let Json(update) =
        payload.map_err(|rejection| ApiError::Validation(vec![rejection.body_text()]))?;

    let violations = validator::validate_usage(&update.usage);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    if !state.repo.update(&username, update.usage).await {
        return Err(ApiError::NotFound(username));
    }

    tracing::info!(username = %username, "user updated");

    // Read back so the response echoes the record as stored.
    let data = state
        .repo
        .get(&username)
        .await
        .ok_or_else(|| ApiError::NotFound(username.clone()))?;

    Ok(Json(UserUpdatedResponse {
        message: format!("User {} updated", username),
        data,
    }))
}

/// delete_user
///
/// Removes a record by username.
#[utoipa::path(
    delete,
    path = "/users/{username}",
    params(("username" = String, Path, description = "Target username")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 401, description = "Bad or missing token", body = MessageResponse),
        (status = 404, description = "Unknown username", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.repo.delete(&username).await {
        return Err(ApiError::NotFound(username));
    }

    tracing::info!(username = %username, "user deleted");

    Ok(Json(MessageResponse {
        message: format!("User {} deleted", username),
    }))
}

/// get_stats
///
/// Reports per-route access counts collected by the `track_route` middleware
/// since startup.
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Route access counts", body = StatsResponse),
        (status = 401, description = "Bad or missing token", body = MessageResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        generated_at: Utc::now(),
        routes: state.metrics.snapshot(),
    })
}

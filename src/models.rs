use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Core Application Schemas ---

/// User
///
/// The sole entity of the registry. The `username` is the primary key: unique
/// within the store and immutable once created. Only `usage` can change after
/// creation (see the PUT handler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub struct User {
    /// Primary key. Non-empty, 3..=50 characters after trimming.
    pub username: String,
    /// Role marker, one of "Admin" | "User" | "Guest" (case-sensitive).
    pub usage: String,
}

/// --- Request Payloads (Input Schemas) ---

/// UpdateUserRequest
///
/// Input payload for PUT /users/{username}. Only the `usage` field is consulted;
/// the target username comes from the URL path and cannot be changed through this
/// endpoint (renaming is intentionally impossible).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateUserRequest {
    pub usage: String,
}

/// --- Response Schemas (Output) ---

/// MessageResponse
///
/// Uniform body for failure responses and simple confirmations. Every non-2xx
/// response from the API carries exactly this shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct MessageResponse {
    pub message: String,
}

/// UserUpdatedResponse
///
/// Output of a successful PUT: a confirmation message plus the record as it now
/// stands in the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UserUpdatedResponse {
    pub message: String,
    pub data: User,
}

/// RouteHit
///
/// One entry of the stats report: a route template (method + path) and how many
/// matched requests it has received since startup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct RouteHit {
    pub route: String,
    pub hits: u64,
}

/// StatsResponse
///
/// Output schema for GET /stats. Counts are per route template (e.g.
/// "PUT /users/{username}"), sorted by route for deterministic output.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct StatsResponse {
    #[schema(value_type = String)]
    pub generated_at: DateTime<Utc>,
    pub routes: Vec<RouteHit>,
}

use crate::models::MessageResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// ApiError
///
/// The four failure kinds the API can produce. All are handled locally at the
/// handler boundary and converted into the corresponding HTTP status with a
/// JSON `{ message }` body; none are fatal to the process.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Bad or missing bearer token. 401.
    Unauthorized,
    /// Malformed record shape; carries the violated constraints. 400.
    Validation(Vec<String>),
    /// Duplicate username on create. 400.
    Conflict(String),
    /// Unknown username on update/delete. 404.
    NotFound(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Access denied: authentication required.".to_string(),
            ApiError::Validation(violations) => {
                format!("Invalid user data: {}", violations.join("; "))
            }
            ApiError::Conflict(username) => format!("User '{}' already exists", username),
            ApiError::NotFound(username) => format!("User '{}' not found", username),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageResponse {
            message: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

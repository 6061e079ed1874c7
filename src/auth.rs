use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{config::AppConfig, error::ApiError};

/// require_bearer
///
/// The authentication gate, applied as a route layer in front of every API
/// route. The entire `Authorization` header value must equal the configured
/// expectation (`Bearer <token>`) exactly — case-sensitive, no parsing of auth
/// schemes beyond the string comparison. A missing or empty header compares
/// unequal and is rejected the same way.
///
/// Rejection is terminal: the 401 response is produced here and the request
/// never reaches routing, validation, or the store. No side effects beyond the
/// response.
pub async fn require_bearer(
    State(config): State<AppConfig>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if provided != config.expected_authorization() {
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}

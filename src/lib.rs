use axum::{
    Router,
    extract::FromRef,
    http::HeaderName,
    middleware,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod repository;
pub mod validator;

pub mod routes;
use routes::{protected, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use metrics::{MetricsState, RouteCounter};
pub use repository::{InMemoryUserRepository, RepositoryState};

/// ApiDoc
///
/// Aggregates the OpenAPI documentation from the `#[utoipa::path]` handler
/// annotations and the `ToSchema` models. The resulting JSON is served at
/// `/api-docs/openapi.json`, with Swagger UI at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_users,
        handlers::create_user,
        handlers::update_user,
        handlers::delete_user,
        handlers::get_stats
    ),
    components(
        schemas(
            models::User, models::UpdateUserRequest, models::MessageResponse,
            models::UserUpdatedResponse, models::StatsResponse, models::RouteHit
        )
    ),
    tags(
        (name = "user-registry", description = "In-memory user registry API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single container holding all shared services and configuration,
/// constructed explicitly in main (or a test harness) and handed to the router.
/// No service is reachable as an ambient singleton.
#[derive(Clone)]
pub struct AppState {
    /// The user store, behind the repository trait.
    pub repo: RepositoryState,
    /// Per-route access counts.
    pub metrics: MetricsState,
    /// The loaded, immutable configuration.
    pub config: AppConfig,
}

// FromRef lets middleware pull just the component it needs out of the shared
// state instead of taking the whole AppState.

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(app_state: &AppState) -> MetricsState {
        app_state.metrics.clone()
    }
}

/// create_router
///
/// Assembles the routing structure, applies the auth and metrics layers, and
/// registers the application state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        // Documentation: auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: health only, no middleware.
        .merge(public::public_routes())
        // The API surface. Layer order matters: `require_bearer` is added last
        // so it runs first — a rejected request is counted by neither layer nor
        // handler, and never reaches the store.
        .merge(
            protected::protected_routes()
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    metrics::track_route,
                ))
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::require_bearer,
                )),
        )
        .with_state(state);

    // Observability and correlation layers, applied outermost.
    base_router
        .layer(
            ServiceBuilder::new()
                // Unique request id per inbound request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // Request/response lifecycle wrapped in a tracing span carrying
                // the request id.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // Echo the request id back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span factory for `TraceLayer`: includes the x-request-id header so every log
/// line for a single request is correlated by a unique id.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}

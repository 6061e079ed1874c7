use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_registry::{
    AppState, MetricsState, RouteCounter, create_router,
    config::{AppConfig, Env},
    repository::{InMemoryUserRepository, RepositoryState},
};

/// main
///
/// Entry point: loads configuration, initializes logging, builds the in-memory
/// state, and runs the HTTP server.
#[tokio::main]
async fn main() {
    // Configuration, fail-fast on missing production secrets.
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // Log filter: RUST_LOG wins, otherwise sensible local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "user_registry=debug,tower_http=info,axum=trace".into());

    // Pretty output for local debugging, JSON for log aggregators in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // State assembly. The store and counter live for the process lifetime;
    // nothing survives a restart.
    let repo = Arc::new(InMemoryUserRepository::new()) as RepositoryState;
    let metrics = Arc::new(RouteCounter::new()) as MetricsState;

    let app_state = AppState {
        repo,
        metrics,
        config,
    };

    let app = create_router(app_state);

    let listener = TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("FATAL: failed to bind 0.0.0.0:3000");

    tracing::info!("Listening on 0.0.0.0:3000");
    tracing::info!("API documentation (Swagger UI) available at: http://localhost:3000/swagger-ui");

    axum::serve(listener, app).await.expect("server error");
}

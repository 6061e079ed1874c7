use std::env;

/// The default shared secret, kept for compatibility with existing clients.
/// Local runs fall back to it; production refuses to start without an explicit
/// `API_TOKEN`.
const DEFAULT_API_TOKEN: &str = "secret123";

/// AppConfig
///
/// The application's immutable configuration, loaded once at startup and shared
/// across all requests via the application state.
#[derive(Clone)]
pub struct AppConfig {
    // Runtime environment marker. Controls log format and secret requirements.
    pub env: Env,
    // The shared secret expected in the Authorization header (without the
    // "Bearer " prefix).
    pub api_token: String,
}

/// Env
///
/// Runtime context: pretty logs and a default token locally, JSON logs and a
/// mandatory token in production.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Safe, non-panicking instance for test state scaffolding. Uses the
    /// compatibility token so tests can authenticate without environment setup.
    fn default() -> Self {
        Self {
            env: Env::Local,
            api_token: DEFAULT_API_TOKEN.to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Canonical startup initialization from environment variables, fail-fast.
    ///
    /// # Panics
    /// Panics if `API_TOKEN` is unset in production. Starting with an implicit
    /// default secret is acceptable only for local development.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let api_token = match env {
            Env::Production => {
                env::var("API_TOKEN").expect("FATAL: API_TOKEN must be set in production.")
            }
            Env::Local => {
                env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
            }
        };

        Self { env, api_token }
    }

    /// The exact Authorization header value accepted by the auth gate.
    /// Comparison elsewhere is a full-string, case-sensitive equality check; no
    /// scheme parsing happens beyond this formatting.
    pub fn expected_authorization(&self) -> String {
        format!("Bearer {}", self.api_token)
    }
}

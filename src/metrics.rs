use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::models::RouteHit;

/// RouteCounter
///
/// Per-route access counts for the process lifetime, keyed by route template
/// ("METHOD /path/{param}") so that path parameters do not explode cardinality.
/// A plain std Mutex is enough here: the critical section is a map insert.
#[derive(Default)]
pub struct RouteCounter {
    counts: Mutex<HashMap<String, u64>>,
}

impl RouteCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self, route: &str) {
        let mut counts = self.counts.lock().expect("route counter lock poisoned");
        *counts.entry(route.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, route: &str) -> u64 {
        let counts = self.counts.lock().expect("route counter lock poisoned");
        counts.get(route).copied().unwrap_or(0)
    }

    /// Snapshot of all counts, sorted by route for deterministic reporting.
    pub fn snapshot(&self) -> Vec<RouteHit> {
        let counts = self.counts.lock().expect("route counter lock poisoned");
        let mut hits: Vec<RouteHit> = counts
            .iter()
            .map(|(route, hits)| RouteHit {
                route: route.clone(),
                hits: *hits,
            })
            .collect();
        hits.sort_by(|a, b| a.route.cmp(&b.route));
        hits
    }
}

/// MetricsState
///
/// The concrete type used to share the counter across the application state.
pub type MetricsState = Arc<RouteCounter>;

/// track_route
///
/// Middleware that counts every matched request against its route template.
/// Must be added with `route_layer` — `MatchedPath` only exists after routing
/// has resolved the request to a route.
pub async fn track_route(
    State(metrics): State<MetricsState>,
    matched: MatchedPath,
    request: Request,
    next: Next,
) -> Response {
    let route = format!("{} {}", request.method(), matched.as_str());
    metrics.increment(&route);
    next.run(request).await
}

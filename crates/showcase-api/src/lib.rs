//! # showcase-api — Axum Service for the Project Showcase
//!
//! Serves the server-rendered showcase pages and a JSON API over one shared
//! in-memory [`showcase_core::ProjectStore`]. Votes are limited to one per
//! project per browser session; sessions and projects live only in memory.
//!
//! ## API Surface
//!
//! | Prefix / Route         | Module                   | Purpose              |
//! |------------------------|--------------------------|----------------------|
//! | `/`, `/upload`, `/results`, `/vote/:id` | [`routes::pages`] | HTML pages + form commands |
//! | `/api/*`               | [`routes::projects`]     | JSON API             |
//! | `/openapi.json`        | [`openapi`]              | OpenAPI document     |
//! | `/health/*`            | this module              | probes and counters  |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → SessionMiddleware → Handler
//! ```
//!
//! Health probes sit outside the session middleware so they never create
//! sessions.

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::middleware::metrics::MetricsSnapshot;
use crate::state::AppState;

pub use error::AppError;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let site = Router::new()
        .merge(routes::pages::router())
        .merge(routes::projects::router())
        .merge(openapi::router())
        .layer(from_fn_with_state(
            state.clone(),
            middleware::session::session_middleware,
        ));

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/health/metrics", get(metrics));

    Router::new()
        .merge(health)
        .merge(site)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::metrics::metrics_middleware,
        ))
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the store is in memory, so ready once serving.
async fn readiness() -> &'static str {
    "ready"
}

#[derive(Debug, Serialize)]
struct MetricsResponse {
    #[serde(flatten)]
    counters: MetricsSnapshot,
    sessions: usize,
    projects: usize,
}

/// Request counters plus live session and project counts.
async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        counters: state.metrics.snapshot(),
        sessions: state.sessions.len(),
        projects: state.store.read().len(),
    })
}

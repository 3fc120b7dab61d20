//! # Request Metrics
//!
//! Lightweight in-process counters using atomics, exposed as JSON at
//! `/health/metrics`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde::Serialize;

use crate::state::AppState;

/// Shared metrics state.
#[derive(Debug, Clone, Default)]
pub struct ApiMetrics {
    request_count: Arc<AtomicU64>,
    error_count: Arc<AtomicU64>,
    vote_count: Arc<AtomicU64>,
    submission_count: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub errors: u64,
    pub votes: u64,
    pub submissions: u64,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_vote(&self) {
        self.vote_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission(&self) {
        self.submission_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.request_count.load(Ordering::Relaxed),
            errors: self.error_count.load(Ordering::Relaxed),
            votes: self.vote_count.load(Ordering::Relaxed),
            submissions: self.submission_count.load(Ordering::Relaxed),
        }
    }
}

/// Middleware that increments request and error counters.
pub async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    let metrics = &state.metrics;
    metrics.request_count.fetch_add(1, Ordering::Relaxed);
    if response.status().is_server_error() || response.status().is_client_error() {
        metrics.error_count.fetch_add(1, Ordering::Relaxed);
    }

    response
}

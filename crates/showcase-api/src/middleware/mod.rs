//! # Middleware
//!
//! - `tracing_layer`: per-request spans via `tower_http::trace::TraceLayer`.
//! - `metrics`: in-process request, error, vote, and submission counters.
//! - `session`: session cookie resolution.

pub mod metrics;
pub mod session;
pub mod tracing_layer;

//! Health check handler

use axum::http::StatusCode;

/// Body returned by the liveness probe
pub const HEALTH_OK_BODY: &str = "OK";

/// ANY /health
///
/// Liveness only: the service has no dependencies to probe.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTH_OK_BODY)
}

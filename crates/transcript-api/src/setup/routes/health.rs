//! Health check handlers and response types.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Id probed by the readiness check; it never has to exist.
const PROBE_ID: &str = "health-probe";
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Run an async check with timeout; returns status string "healthy", "timeout", or "{prefix}: {error}".
async fn run_check<F, E>(timeout: Duration, f: F, error_prefix: &str) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("{}: {}", error_prefix, e),
        Err(_) => "timeout".to_string(),
    }
}

#[derive(serde::Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: String,
    pub storage: String,
}

/// Liveness probe - process is running.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            storage: state.storage.backend_type().to_string(),
        }),
    )
}

/// Readiness probe - the storage backend answers a lookup.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let storage = run_check(
        CHECK_TIMEOUT,
        async { state.storage.exists(PROBE_ID).await.map(|_| ()) },
        "error",
    )
    .await;

    let (status_code, status) = if storage == "healthy" {
        (StatusCode::OK, "ready")
    } else {
        tracing::warn!(storage = %storage, "Readiness check failed");
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status_code,
        Json(HealthCheckResponse {
            status: status.to_string(),
            storage,
        }),
    )
}

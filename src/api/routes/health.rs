//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dataset loads)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 when the student dataset can be loaded.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.loader.load().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with dataset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let loaded = state.loader.load().await;

    let (status, dataset, students) = match &loaded {
        Ok(dataset) => ("healthy", "ok", Some(dataset.len())),
        Err(_) => ("unhealthy", "error", None),
    };

    Json(HealthResponse {
        status: status.to_string(),
        dataset: dataset.to_string(),
        dataset_source: state.loader.describe(),
        students,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checked_at: chrono::Utc::now().to_rfc3339(),
    })
}

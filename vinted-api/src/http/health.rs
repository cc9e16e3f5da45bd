//! Liveness and readiness endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use super::AppState;
use crate::probes;

/// Body of `/api/ready`.
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub checks: std::collections::BTreeMap<String, bool>,
}

/// Liveness for monitors and load balancers; always 200 while serving.
pub(super) async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": state.settings.version,
        "environment": state.settings.env.as_str(),
    }))
}

/// 200 when every backing store answers, 503 otherwise.
pub(super) async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Readiness>) {
    let checks = probes::run_all(&state.probes).await;

    if checks.values().all(|ok| *ok) {
        return (
            StatusCode::OK,
            Json(Readiness {
                status: "ready",
                checks,
            }),
        );
    }

    let failing: Vec<&str> = checks
        .iter()
        .filter(|(_, ok)| !**ok)
        .map(|(name, _)| name.as_str())
        .collect();
    error!(?failing, "Readiness check failed");

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(Readiness {
            status: "unhealthy",
            checks,
        }),
    )
}

pub(super) async fn v1_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use courrier_core::SanitizedConfig;

use crate::metrics::encode_metrics;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// Prometheus scrape endpoint
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.pending_sync().count() {
        Ok(count) => crate::metrics::record_pending_sync(count),
        Err(e) => warn!(error = %e, "Failed to refresh pending sync gauge"),
    }

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}

//! Pending sync counter handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use courrier_core::SyncError;

use crate::metrics::record_pending_sync;
use crate::state::AppState;

/// Request body for decrementing the counter
#[derive(Debug, Default, Deserialize)]
pub struct DecrementRequest {
    /// Number of items that were synchronized (defaults to 1)
    #[serde(default)]
    pub count: Option<u64>,
}

/// Current pending count
#[derive(Debug, Serialize)]
pub struct PendingResponse {
    pub pending: u64,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct SyncErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<SyncErrorResponse>);

fn respond(
    operation: &str,
    result: Result<u64, SyncError>,
) -> Result<Json<PendingResponse>, ApiError> {
    match result {
        Ok(pending) => {
            record_pending_sync(pending);
            debug!(operation, pending, "Pending sync updated");
            Ok(Json(PendingResponse { pending }))
        }
        Err(e) => {
            error!(operation, error = %e, "Pending sync store failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SyncErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// Get the number of items waiting to be synchronized
pub async fn get_pending(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PendingResponse>, ApiError> {
    respond("count", state.pending_sync().count())
}

/// Record one more report waiting to be synchronized
pub async fn increment_pending(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PendingResponse>, ApiError> {
    respond("increment", state.pending_sync().increment())
}

/// Mark items as synchronized
pub async fn decrement_pending(
    State(state): State<Arc<AppState>>,
    body: Option<Json<DecrementRequest>>,
) -> Result<Json<PendingResponse>, ApiError> {
    let count = body.and_then(|Json(req)| req.count).unwrap_or(1);
    respond("decrement", state.pending_sync().decrement(count))
}

/// Reset the counter after a full synchronization
pub async fn clear_pending(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PendingResponse>, ApiError> {
    respond("clear", state.pending_sync().clear())
}

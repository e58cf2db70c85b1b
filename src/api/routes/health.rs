//! Health check endpoints

use axum::{extract::State, Json};

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        entries: state.store.len().await,
    })
}

/// GET /health/live
pub async fn live() -> &'static str {
    "ok"
}

/// GET /health/ready
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    // Ready once the store has been opened; report what was configured vs
    // what is actually backing the store, for ops
    Json(serde_json::json!({
        "status": "ready",
        "configured_data_file": state.config.storage.data_file,
        "data_file": state.store.path().display().to_string(),
        "addr": state.config.api.addr(),
    }))
}

//! Analytics endpoints
//!
//! Each endpoint loads a snapshot of the full series and runs one pure
//! analysis over it. Insufficient data surfaces as `null` in the body,
//! never as an error status.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::analytics::{
    analyze_correlations, analyze_monthly, analyze_streaks, analyze_trend, analyze_volatility,
    analyze_weekly, rolling_average, summarize, ROLLING_LONG, ROLLING_SHORT,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/analytics/trend
///
/// Includes both charting rolling averages (7 and 30 day windows)
/// alongside the classification.
pub async fn trend(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let series = state.store.load().await;
    Ok(Json(json!({
        "trend": analyze_trend(&series),
        "rolling_short": rolling_average(&series, ROLLING_SHORT),
        "rolling_long": rolling_average(&series, ROLLING_LONG),
    })))
}

/// GET /api/v1/analytics/weekly
pub async fn weekly(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let series = state.store.load().await;
    Ok(Json(serde_json::to_value(analyze_weekly(&series)).map_err(
        |e| ApiError::Internal(e.to_string()),
    )?))
}

/// GET /api/v1/analytics/monthly
pub async fn monthly(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let series = state.store.load().await;
    Ok(Json(serde_json::to_value(analyze_monthly(&series)).map_err(
        |e| ApiError::Internal(e.to_string()),
    )?))
}

/// GET /api/v1/analytics/correlations
pub async fn correlations(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let series = state.store.load().await;
    Ok(Json(
        serde_json::to_value(analyze_correlations(&series))
            .map_err(|e| ApiError::Internal(e.to_string()))?,
    ))
}

/// GET /api/v1/analytics/streaks
pub async fn streaks(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let series = state.store.load().await;
    Ok(Json(json!({ "streaks": analyze_streaks(&series) })))
}

/// GET /api/v1/analytics/volatility
pub async fn volatility(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let series = state.store.load().await;
    Ok(Json(json!({ "volatility": analyze_volatility(&series) })))
}

/// GET /api/v1/analytics/summary
pub async fn summary(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let series = state.store.load().await;
    Ok(Json(
        serde_json::to_value(summarize(&series)).map_err(|e| ApiError::Internal(e.to_string()))?,
    ))
}

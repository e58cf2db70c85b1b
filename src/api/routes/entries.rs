//! Mood entry CRUD and search endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};

use crate::api::dto::{AckResponse, EntryResponse, RangeQuery, SearchQuery, UpsertEntryRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::storage::MoodEntry;

/// POST /api/v1/entries
pub async fn upsert_entry(
    State(state): State<AppState>,
    Json(req): Json<UpsertEntryRequest>,
) -> ApiResult<(StatusCode, Json<AckResponse>)> {
    let entry: MoodEntry = req.into();
    let date = entry.date;
    let replaced = state.store.get(date).await.is_some();
    state.store.upsert(entry).await?;

    let status = if replaced { "updated" } else { "created" };
    Ok((
        if replaced {
            StatusCode::OK
        } else {
            StatusCode::CREATED
        },
        Json(AckResponse {
            status: status.to_string(),
            date,
        }),
    ))
}

/// GET /api/v1/entries
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<Json<Vec<EntryResponse>>> {
    let series = match (query.start, query.end) {
        (Some(start), Some(end)) => {
            if start > end {
                return Err(ApiError::Validation(format!(
                    "start {} is after end {}",
                    start, end
                )));
            }
            state.store.range(start, end).await
        }
        (Some(start), None) => {
            state.store.range(start, NaiveDate::MAX).await
        }
        (None, Some(end)) => state.store.range(NaiveDate::MIN, end).await,
        (None, None) => state.store.load().await,
    };

    Ok(Json(
        series.entries().iter().map(EntryResponse::from).collect(),
    ))
}

/// GET /api/v1/entries/search
pub async fn search_entries(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<EntryResponse>>> {
    let hits = state.store.search(&query.q).await;
    Ok(Json(hits.into_iter().map(EntryResponse::from).collect()))
}

/// GET /api/v1/entries/{date}
pub async fn get_entry(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> ApiResult<Json<EntryResponse>> {
    state
        .store
        .get(date)
        .await
        .map(|e| Json(e.into()))
        .ok_or_else(|| ApiError::NotFound(format!("entry for {}", date)))
}

/// DELETE /api/v1/entries/{date}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> ApiResult<Json<AckResponse>> {
    state.store.delete(date).await?;
    Ok(Json(AckResponse {
        status: "deleted".to_string(),
        date,
    }))
}

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let stats = state.store.statistics().await;
    let today = Utc::now().date_naive();
    let current_streak = state.store.current_streak(today).await;

    Ok(Json(json!({
        "stats": stats,
        "current_streak": current_streak,
    })))
}

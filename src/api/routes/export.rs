//! Export and report endpoints

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};

use crate::api::dto::{ExportQuery, ReportQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::report::{build_report, render_text_summary};
use crate::storage::MoodSeries;

/// GET /api/v1/export
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<Response> {
    let series = match (query.start, query.end) {
        (None, None) => state.store.load().await,
        (start, end) => {
            let start = start.unwrap_or(NaiveDate::MIN);
            let end = end.unwrap_or(NaiveDate::MAX);
            if start > end {
                return Err(ApiError::Validation(format!(
                    "start {} is after end {}",
                    start, end
                )));
            }
            state.store.range(start, end).await
        }
    };

    let stamp = Utc::now().format("%Y%m%d");
    match query.format.as_str() {
        "csv" => {
            let body = render_csv(&series)?;
            Ok(attachment(
                body,
                "text/csv",
                &format!("mood_log_{}.csv", stamp),
            ))
        }
        "json" => {
            let report = build_report(&series);
            let body = serde_json::to_vec_pretty(&report)
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            Ok(attachment(
                body,
                "application/json",
                &format!("mood_report_{}.json", stamp),
            ))
        }
        other => Err(ApiError::Validation(format!(
            "unknown export format {:?}, expected csv or json",
            other
        ))),
    }
}

/// GET /api/v1/report
pub async fn report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Response> {
    let series = match (query.start, query.end) {
        (None, None) => state.store.load().await,
        (start, end) => {
            let start = start.unwrap_or(NaiveDate::MIN);
            let end = end.unwrap_or(NaiveDate::MAX);
            if start > end {
                return Err(ApiError::Validation(format!(
                    "start {} is after end {}",
                    start, end
                )));
            }
            state.store.range(start, end).await
        }
    };

    match query.format.as_str() {
        "text" => {
            let body = render_text_summary(&series);
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                body,
            )
                .into_response())
        }
        "json" => {
            let report = build_report(&series);
            Ok(axum::Json(report).into_response())
        }
        other => Err(ApiError::Validation(format!(
            "unknown report format {:?}, expected json or text",
            other
        ))),
    }
}

fn render_csv(series: &MoodSeries) -> ApiResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["date", "mood", "journal"])
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    for entry in series.entries() {
        writer
            .write_record([
                entry.date.format("%Y-%m-%d").to_string(),
                entry.mood.to_string(),
                entry.journal.clone(),
            ])
            .map_err(|e| ApiError::Internal(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| ApiError::Internal(e.to_string()))
}

fn attachment(body: Vec<u8>, content_type: &str, filename: &str) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

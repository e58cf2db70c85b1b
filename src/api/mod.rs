//! Moodlog REST API
//!
//! HTTP API layer built with Axum.
//!
//! # Endpoints
//!
//! ## Entries
//! - `POST /api/v1/entries` - Log or update the entry for a date
//! - `GET /api/v1/entries` - List entries, optionally within `?start=&end=`
//! - `GET /api/v1/entries/search` - Search journals with `?q=`
//! - `GET /api/v1/entries/:date` - Get one entry
//! - `DELETE /api/v1/entries/:date` - Delete one entry
//!
//! ## Statistics & analytics
//! - `GET /api/v1/stats` - Basic statistics and the current streak
//! - `GET /api/v1/analytics/trend` - Trend plus rolling averages
//! - `GET /api/v1/analytics/weekly` - Weekday patterns
//! - `GET /api/v1/analytics/monthly` - Month-of-year patterns
//! - `GET /api/v1/analytics/correlations` - Factor correlations
//! - `GET /api/v1/analytics/streaks` - Streak analysis
//! - `GET /api/v1/analytics/volatility` - Volatility and stability
//! - `GET /api/v1/analytics/summary` - Everything at once
//!
//! ## Export & reports
//! - `GET /api/v1/export` - Download the log as CSV or a JSON report
//! - `GET /api/v1/report` - Analytics report, `?format=json|text`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Entry routes
        .route("/entries", post(routes::entries::upsert_entry))
        .route("/entries", get(routes::entries::list_entries))
        .route("/entries/search", get(routes::entries::search_entries))
        .route("/entries/:date", get(routes::entries::get_entry))
        .route("/entries/:date", delete(routes::entries::delete_entry))
        // Statistics
        .route("/stats", get(routes::entries::get_stats))
        // Analytics routes
        .route("/analytics/trend", get(routes::analytics::trend))
        .route("/analytics/weekly", get(routes::analytics::weekly))
        .route("/analytics/monthly", get(routes::analytics::monthly))
        .route(
            "/analytics/correlations",
            get(routes::analytics::correlations),
        )
        .route("/analytics/streaks", get(routes::analytics::streaks))
        .route("/analytics/volatility", get(routes::analytics::volatility))
        .route("/analytics/summary", get(routes::analytics::summary))
        // Export & reports
        .route("/export", get(routes::export::export))
        .route("/report", get(routes::export::report));

    let health_routes = Router::new()
        .route("/live", get(routes::health::live))
        .route("/ready", get(routes::health::ready))
        .route("/", get(routes::health::health));

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Moodlog API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Moodlog API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

//! Health check endpoint
//!
//! Reports whether the word-frequency database can still answer queries.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" when the database answered, "degraded" otherwise
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    /// "ok" or "unavailable"
    pub database: &'static str,
}

/// GET /health
///
/// 200 when `SELECT 1` succeeds on the lookup pool, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_ok = match sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Health check: database unavailable: {}", e);
            false
        }
    };

    let (status_code, status, database) = if db_ok {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            module: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

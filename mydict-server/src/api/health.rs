//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::api::TermError;
use crate::AppState;

/// Health check response: status, module name, version and store size
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub term_count: i64,
}

/// GET /health
///
/// Also proves the store answers queries.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, TermError> {
    let term_count = mydict_common::db::count_terms(&state.db).await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        module: "mydict".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        term_count,
    }))
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

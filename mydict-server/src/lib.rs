//! mydict-server library - HTTP surface of the personal dictionary
//!
//! JSON API for registering and listing terms, plus two browser pages.

use axum::Router;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Term store connection pool
    pub db: SqlitePool,
    /// Directory served under /static
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            static_dir: static_dir.into(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let static_files = ServeDir::new(&state.static_dir);

    let api = Router::new()
        .route("/", get(api::welcome))
        .route("/add_term", post(api::add_term))
        .route("/add", get(api::serve_add_page).post(api::add_term))
        .route("/terms", get(api::list_terms_grouped))
        .route("/terms/grouped", get(api::list_terms_grouped))
        .route("/terms/sorted", get(api::list_terms_sorted))
        .route("/term/:id", get(api::get_term))
        .route("/web", get(api::serve_terms_page))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

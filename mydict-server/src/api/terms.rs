//! Term registration and listing
//!
//! Listing comes in two explicitly named modes, both filtered first:
//! - grouped by gojūon row (`/terms`, `/terms/grouped`)
//! - flat, sorted by reading (`/terms/sorted`)

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use mydict_common::gojuon::{grouped_view, sorted_view};
use mydict_common::{db, GroupedTerms, NewTerm, Term};

use crate::api::TermError;
use crate::AppState;

/// Query parameters for listing
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Search keyword, matched case-insensitively against word, reading and description
    #[serde(alias = "query")]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AddTermResponse {
    pub message: String,
    pub id: i64,
}

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to MyDictionary (Terms) API".to_string(),
    })
}

/// POST /add_term (also POST /add)
///
/// Body: `{ "word": "...", "reading": "...", "description": "...", "image_url": "..." }`
pub async fn add_term(
    State(state): State<AppState>,
    payload: Result<Json<NewTerm>, JsonRejection>,
) -> Result<Json<AddTermResponse>, TermError> {
    let Json(new_term) = payload?;
    let term = db::insert_term(&state.db, &new_term).await?;

    Ok(Json(AddTermResponse {
        message: format!("{} を追加しました。", term.word),
        id: term.id,
    }))
}

/// GET /terms, GET /terms/grouped
///
/// Terms bucketed by the gojūon row of their reading, empty rows omitted.
pub async fn list_terms_grouped(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<GroupedTerms>, TermError> {
    let terms = db::list_terms(&state.db).await?;
    let grouped = grouped_view(terms, query.q.as_deref());

    debug!("Grouped listing: {} non-empty groups", grouped.len());
    Ok(Json(grouped))
}

/// GET /terms/sorted
///
/// Terms in ascending order of reading, falling back to the word.
pub async fn list_terms_sorted(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Term>>, TermError> {
    let terms = db::list_terms(&state.db).await?;
    let sorted = sorted_view(terms, query.q.as_deref());

    debug!("Sorted listing: {} terms", sorted.len());
    Ok(Json(sorted))
}

/// GET /term/:id
pub async fn get_term(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Term>, TermError> {
    let Path(id) = id?;
    let term = db::get_term(&state.db, id).await?;
    Ok(Json(term))
}

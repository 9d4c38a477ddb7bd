//! Error responses for the term API

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

/// Term API errors
#[derive(Debug)]
pub enum TermError {
    DuplicateWord(String),
    NotFound(String),
    InvalidInput(String),
    /// Request body or path that the extractors could not parse
    Malformed(StatusCode, String),
    DatabaseError(String),
}

impl From<mydict_common::Error> for TermError {
    fn from(err: mydict_common::Error) -> Self {
        use mydict_common::Error;

        match err {
            Error::DuplicateWord(word) => TermError::DuplicateWord(word),
            Error::NotFound(what) => TermError::NotFound(what),
            Error::InvalidInput(msg) => TermError::InvalidInput(msg),
            other => TermError::DatabaseError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for TermError {
    fn from(rejection: JsonRejection) -> Self {
        TermError::Malformed(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for TermError {
    fn from(rejection: PathRejection) -> Self {
        TermError::Malformed(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for TermError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            TermError::DuplicateWord(word) => {
                debug!("Duplicate word: {}", word);
                (StatusCode::BAD_REQUEST, "その用語は既に存在します。".to_string())
            }
            TermError::NotFound(what) => {
                debug!("Not found: {}", what);
                (StatusCode::NOT_FOUND, "Term not found".to_string())
            }
            TermError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid input: {}", msg))
            }
            TermError::Malformed(status, msg) => {
                debug!("Rejected request: {}", msg);
                (status, msg)
            }
            TermError::DatabaseError(msg) => {
                // Details stay in the log; clients get a fixed message
                error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

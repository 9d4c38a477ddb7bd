//! HTTP API handlers for mydict-server

pub mod error;
pub mod health;
pub mod terms;
pub mod web;

pub use error::TermError;
pub use health::health_routes;
pub use terms::{add_term, get_term, list_terms_grouped, list_terms_sorted, welcome};
pub use web::{serve_add_page, serve_terms_page};

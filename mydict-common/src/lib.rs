//! # MyDictionary Common Library
//!
//! Shared code for the MyDictionary service including:
//! - Term record and creation payload
//! - Gojūon grouping, reading-based sorting and keyword filtering
//! - Term store over SQLite
//! - Configuration loading and root folder resolution

pub mod config;
pub mod db;
pub mod error;
pub mod gojuon;
pub mod model;

pub use error::{Error, Result};
pub use gojuon::{GojuonGroup, GroupedTerms};
pub use model::{NewTerm, Term};

//! Term queries
//!
//! The store hands terms back in natural order (ascending id). Ordering by
//! reading is left to [`crate::gojuon`].

use crate::model::{NewTerm, Term};
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Register a new term
///
/// Fails with [`Error::DuplicateWord`] when the word is already taken,
/// leaving the store untouched.
pub async fn insert_term(pool: &SqlitePool, new_term: &NewTerm) -> Result<Term> {
    new_term.validate()?;

    if find_term_by_word(pool, &new_term.word).await?.is_some() {
        warn!("Rejected duplicate word: {}", new_term.word);
        return Err(Error::DuplicateWord(new_term.word.clone()));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO terms (word, reading, description, image_url)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&new_term.word)
    .bind(&new_term.reading)
    .bind(&new_term.description)
    .bind(&new_term.image_url)
    .execute(pool)
    .await;

    let id = match result {
        Ok(done) => done.last_insert_rowid(),
        // Another writer got the word in between the check and the insert
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!("Rejected duplicate word: {}", new_term.word);
            return Err(Error::DuplicateWord(new_term.word.clone()));
        }
        Err(e) => return Err(e.into()),
    };

    info!("Added term {} (id {})", new_term.word, id);

    Ok(Term {
        id,
        word: new_term.word.clone(),
        reading: new_term.reading.clone(),
        description: new_term.description.clone(),
        image_url: new_term.image_url.clone(),
    })
}

/// All terms in natural order
pub async fn list_terms(pool: &SqlitePool) -> Result<Vec<Term>> {
    let terms = sqlx::query_as::<_, Term>(
        "SELECT id, word, reading, description, image_url FROM terms ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(terms)
}

/// Term by id
pub async fn get_term(pool: &SqlitePool, id: i64) -> Result<Term> {
    sqlx::query_as::<_, Term>(
        "SELECT id, word, reading, description, image_url FROM terms WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::NotFound(format!("term {}", id)))
}

/// Term by exact (case-sensitive) word
pub async fn find_term_by_word(pool: &SqlitePool, word: &str) -> Result<Option<Term>> {
    let term = sqlx::query_as::<_, Term>(
        "SELECT id, word, reading, description, image_url FROM terms WHERE word = ?",
    )
    .bind(word)
    .fetch_optional(pool)
    .await?;

    Ok(term)
}

/// Number of registered terms
pub async fn count_terms(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM terms")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

//! Seeding helper for `word_frequencies`
//!
//! Used by tests and local setup; the lookup service itself never writes.

use crate::{Error, Result};
use sqlx::SqlitePool;

/// Insert one record and return the id assigned by the database
pub async fn insert_word_frequency(pool: &SqlitePool, word: &str, frequency: i64) -> Result<i64> {
    if word.is_empty() {
        return Err(Error::InvalidRecord("word must not be empty".to_string()));
    }
    if frequency < 0 {
        return Err(Error::InvalidRecord(format!(
            "frequency must be non-negative (got {} for '{}')",
            frequency, word
        )));
    }

    let result = sqlx::query("INSERT INTO word_frequencies (word, frequency) VALUES (?, ?)")
        .bind(word)
        .bind(frequency)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

//! Database initialization
//!
//! The lookup service only ever reads `word_frequencies`; rows are written by
//! a separate ingestion step. `init_database` exists so that step (and local
//! setup) can create the file and schema, and is safe to call repeatedly.

use crate::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Open (creating if needed) the database at `db_path` and ensure the schema exists
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // WAL lets the read-only lookup service read while ingestion writes
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000));
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_word_frequencies_table(&pool).await?;

    Ok(pool)
}

/// Connect to an existing database in read-only mode
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::Config(format!(
            "Database not found: {} (run with --init-db to create it)",
            db_path.display()
        )));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);
    let pool = SqlitePool::connect_with(options).await?;

    debug!("Connected read-only to {}", db_path.display());
    Ok(pool)
}

/// Single-connection in-memory database with the schema applied
///
/// Every `:memory:` connection is a separate database, so the pool is pinned
/// to exactly one connection that never expires.
pub async fn init_memory_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    create_word_frequencies_table(&pool).await?;

    Ok(pool)
}

/// Create the `word_frequencies` table and its lookup index (idempotent)
pub async fn create_word_frequencies_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS word_frequencies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            word TEXT NOT NULL CHECK (length(word) > 0),
            frequency INTEGER NOT NULL DEFAULT 0 CHECK (frequency >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_word_frequencies_word ON word_frequencies(word)")
        .execute(pool)
        .await?;

    Ok(())
}

//! Lookup Store: word → frequency rows from `word_frequencies`

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;
use wordfreq_common::config::MatchConfig;
use wordfreq_common::{Result, WordFrequencyRecord};

/// Data-layer query over persisted word/frequency records
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Every record whose word matches `word`, in ascending id order
    ///
    /// No match is an empty vector, not an error.
    async fn get_words(&self, word: &str) -> Result<Vec<WordFrequencyRecord>>;
}

/// `WordStore` backed by SQLite
#[derive(Clone)]
pub struct SqliteWordStore {
    db: SqlitePool,
    matching: MatchConfig,
}

impl SqliteWordStore {
    pub fn new(db: SqlitePool, matching: MatchConfig) -> Self {
        Self { db, matching }
    }

    /// Search term after the match policy's whitespace rule, or `None` if blank
    fn search_term<'a>(&self, word: &'a str) -> Option<&'a str> {
        if word.trim().is_empty() {
            return None;
        }
        if self.matching.trim_whitespace {
            Some(word.trim())
        } else {
            Some(word)
        }
    }

    fn query_sql(&self) -> &'static str {
        if self.matching.case_sensitive {
            "SELECT id, word, frequency FROM word_frequencies WHERE word = ? ORDER BY id ASC"
        } else {
            "SELECT id, word, frequency FROM word_frequencies WHERE word = ? COLLATE NOCASE ORDER BY id ASC"
        }
    }
}

#[async_trait]
impl WordStore for SqliteWordStore {
    async fn get_words(&self, word: &str) -> Result<Vec<WordFrequencyRecord>> {
        let Some(term) = self.search_term(word) else {
            debug!("Blank search term, skipping query");
            return Ok(Vec::new());
        };

        let records = sqlx::query_as::<_, WordFrequencyRecord>(self.query_sql())
            .bind(term)
            .fetch_all(&self.db)
            .await?;

        debug!(word = term, matches = records.len(), "Word lookup");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfreq_common::db::{init_memory_database, insert_word_frequency};
    use wordfreq_common::Error;

    async fn seeded_store(matching: MatchConfig) -> SqliteWordStore {
        let pool = init_memory_database().await.unwrap();
        insert_word_frequency(&pool, "test", 3).await.unwrap();
        insert_word_frequency(&pool, "other", 8).await.unwrap();
        SqliteWordStore::new(pool, matching)
    }

    #[tokio::test]
    async fn test_get_words_returns_matching_record() {
        let store = seeded_store(MatchConfig::default()).await;

        let results = store.get_words("test").await.unwrap();

        assert_eq!(results, vec![WordFrequencyRecord::new(1, "test", 3)]);
    }

    #[tokio::test]
    async fn test_get_words_no_match_is_empty() {
        let store = seeded_store(MatchConfig::default()).await;

        let results = store.get_words("missing").await.unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_blank_term_is_empty() {
        let store = seeded_store(MatchConfig::default()).await;

        assert!(store.get_words("").await.unwrap().is_empty());
        assert!(store.get_words("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicates_returned_in_id_order() {
        let store = seeded_store(MatchConfig::default()).await;
        insert_word_frequency(&store.db, "test", 11).await.unwrap();

        let results = store.get_words("test").await.unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.word == "test"));
        assert_eq!(results[0].id, 1);
        assert_eq!(results[1].frequency, 11);
    }

    #[tokio::test]
    async fn test_default_policy_is_exact() {
        let store = seeded_store(MatchConfig::default()).await;

        assert!(store.get_words("TEST").await.unwrap().is_empty());
        assert!(store.get_words(" test ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_case_insensitive_policy() {
        let store = seeded_store(MatchConfig {
            case_sensitive: false,
            trim_whitespace: false,
        })
        .await;

        let results = store.get_words("TeSt").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "test");
    }

    #[tokio::test]
    async fn test_trim_policy() {
        let store = seeded_store(MatchConfig {
            case_sensitive: true,
            trim_whitespace: true,
        })
        .await;

        let results = store.get_words("  test\t").await.unwrap();

        assert_eq!(results, vec![WordFrequencyRecord::new(1, "test", 3)]);
    }

    #[tokio::test]
    async fn test_repeated_lookups_identical() {
        let store = seeded_store(MatchConfig::default()).await;

        let first = store.get_words("test").await.unwrap();
        let second = store.get_words("test").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_closed_pool_reports_database_error() {
        let store = seeded_store(MatchConfig::default()).await;
        store.db.close().await;

        let result = store.get_words("test").await;

        assert!(matches!(result, Err(Error::Database(_))));
    }
}

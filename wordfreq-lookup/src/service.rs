//! Lookup Service (business layer)
//!
//! Currently a straight delegation to the store. Ranking or normalization
//! rules belong here rather than in the store or the HTTP layer.

use std::sync::Arc;

use async_trait::async_trait;
use wordfreq_common::{Result, WordFrequencyRecord};

use crate::store::WordStore;

#[async_trait]
pub trait LookupService: Send + Sync {
    async fn get_word_to_word(&self, word: &str) -> Result<Vec<WordFrequencyRecord>>;
}

/// Business service returning the store's result unmodified
#[derive(Clone)]
pub struct WordToWordService {
    store: Arc<dyn WordStore>,
}

impl WordToWordService {
    pub fn new(store: Arc<dyn WordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LookupService for WordToWordService {
    async fn get_word_to_word(&self, word: &str) -> Result<Vec<WordFrequencyRecord>> {
        self.store.get_words(word).await
    }
}

//! Database models

use serde::{Deserialize, Serialize};

/// One row of the `word_frequencies` table
///
/// Serialized with PascalCase field names (`Id`, `Word`, `Frequency`),
/// which is the JSON shape returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct WordFrequencyRecord {
    pub id: i64,
    pub word: String,
    pub frequency: i64,
}

impl WordFrequencyRecord {
    pub fn new(id: i64, word: impl Into<String>, frequency: i64) -> Self {
        Self {
            id,
            word: word.into(),
            frequency,
        }
    }
}

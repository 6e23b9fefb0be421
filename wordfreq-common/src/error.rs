//! Error type shared by the wordfreq crates

use thiserror::Error;

/// Result alias used throughout wordfreq-common and the lookup service
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Query or connection failure reported by the persistence engine
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure (database directory, config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bootstrap TOML could not be parsed
    #[error("Config parse error in {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration value present but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record rejected before reaching the database (empty word, negative count)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

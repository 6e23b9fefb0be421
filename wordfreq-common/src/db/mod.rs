//! Word-frequency database: model, schema, connections

pub mod init;
pub mod models;
pub mod records;

pub use init::{connect_readonly, init_database, init_memory_database};
pub use models::WordFrequencyRecord;
pub use records::insert_word_frequency;

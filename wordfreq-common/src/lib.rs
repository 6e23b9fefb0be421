//! # wordfreq Common Library
//!
//! Shared code for the wordfreq services:
//! - Error type
//! - Word-frequency data model and database initialization
//! - Bootstrap configuration loading

pub mod config;
pub mod db;
pub mod error;

pub use db::WordFrequencyRecord;
pub use error::{Error, Result};

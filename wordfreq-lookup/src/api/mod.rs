//! HTTP API handlers for wordfreq-lookup

pub mod buildinfo;
pub mod health;
pub mod lookup;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use lookup::{get_words, LookupEndpoint, LookupResponse};

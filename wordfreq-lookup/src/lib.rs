//! wordfreq-lookup library - word-frequency lookup service
//!
//! Three layers, each behind a trait or a plain struct so tests can swap the
//! layer below:
//! - [`store::WordStore`]: query `word_frequencies`
//! - [`service::LookupService`]: business delegation
//! - [`api::LookupEndpoint`]: HTTP boundary

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use wordfreq_common::config::MatchConfig;

pub mod api;
pub mod error;
pub mod service;
pub mod settings;
pub mod store;

use api::LookupEndpoint;
use service::{LookupService, WordToWordService};
use store::SqliteWordStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub endpoint: Arc<LookupEndpoint>,
    /// Pool behind the store, probed by `/health`
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(endpoint: LookupEndpoint, db: SqlitePool) -> Self {
        Self {
            endpoint: Arc::new(endpoint),
            db,
        }
    }

    /// Wire the SQLite store, the business service and the endpoint together
    pub fn from_pool(db: SqlitePool, matching: MatchConfig) -> Self {
        let store = Arc::new(SqliteWordStore::new(db.clone(), matching));
        let service: Arc<dyn LookupService> = Arc::new(WordToWordService::new(store));
        Self::new(LookupEndpoint::new(service), db)
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/word-to-word", get(api::get_words))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

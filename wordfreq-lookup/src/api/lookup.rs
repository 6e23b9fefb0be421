//! Lookup Endpoint (controller layer)
//!
//! GET /api/word-to-word?word=<term>

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};
use wordfreq_common::WordFrequencyRecord;

use crate::error::{error_response, FailureKind};
use crate::service::LookupService;
use crate::AppState;

/// Query parameters for a word lookup
#[derive(Debug, Deserialize)]
pub struct WordQuery {
    pub word: String,
}

/// Outcome of a lookup at the HTTP boundary
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResponse {
    /// 200 with the records as a JSON array (possibly empty)
    Success(Vec<WordFrequencyRecord>),
    Failure { kind: FailureKind, message: String },
}

impl LookupResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupResponse::Success(_))
    }
}

impl IntoResponse for LookupResponse {
    fn into_response(self) -> Response {
        match self {
            LookupResponse::Success(records) => (StatusCode::OK, Json(records)).into_response(),
            LookupResponse::Failure { kind, message } => error_response(kind, message),
        }
    }
}

/// Wraps the business service result in a `LookupResponse`
#[derive(Clone)]
pub struct LookupEndpoint {
    service: Arc<dyn LookupService>,
}

impl LookupEndpoint {
    pub fn new(service: Arc<dyn LookupService>) -> Self {
        Self { service }
    }

    pub async fn get_words(&self, word: &str) -> LookupResponse {
        match self.service.get_word_to_word(word).await {
            Ok(records) => {
                info!("Lookup '{}' matched {} record(s)", word, records.len());
                LookupResponse::Success(records)
            }
            Err(e) => {
                error!("Lookup '{}' failed: {}", word, e);
                LookupResponse::Failure {
                    kind: FailureKind::from(&e),
                    message: e.to_string(),
                }
            }
        }
    }
}

/// GET /api/word-to-word?word=<term>
pub async fn get_words(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> LookupResponse {
    state.endpoint.get_words(&query.word).await
}

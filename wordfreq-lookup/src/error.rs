//! Failure classification and JSON error bodies for the HTTP boundary

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use wordfreq_common::Error;

/// Category of a failed lookup, determining the HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Caller supplied an unusable search term (400)
    InvalidInput,
    /// Store unreachable or query failed (500)
    Persistence,
    /// Anything else (500)
    Internal,
}

impl FailureKind {
    pub fn status(self) -> StatusCode {
        match self {
            FailureKind::InvalidInput => StatusCode::BAD_REQUEST,
            FailureKind::Persistence | FailureKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "BAD_REQUEST",
            FailureKind::Persistence => "DATABASE_ERROR",
            FailureKind::Internal => "INTERNAL_ERROR",
        }
    }
}

impl From<&Error> for FailureKind {
    fn from(err: &Error) -> Self {
        match err {
            Error::Database(_) | Error::Io(_) => FailureKind::Persistence,
            Error::InvalidRecord(_) => FailureKind::InvalidInput,
            Error::Config(_) | Error::ConfigParse { .. } => FailureKind::Internal,
        }
    }
}

/// `{"error": {"code": ..., "message": ...}}` with the kind's status
pub fn error_response(kind: FailureKind, message: String) -> Response {
    let body = Json(json!({
        "error": {
            "code": kind.code(),
            "message": message,
        }
    }));

    (kind.status(), body).into_response()
}

//! Server-side errors and the JSON error response.
//!
//! # Design
//! `ServerError` covers startup and seeding: opening the database, running
//! migrations, binding the listener. `ApiError` wraps a request outcome from
//! `todo-core` and renders it as `{"message": ...}` with the matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::HandlerError;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Body of every handled error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

/// A failed request, ready to become an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub HandlerError);

impl From<HandlerError> for ApiError {
    fn from(error: HandlerError) -> Self {
        ApiError(error)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            HandlerError::NotFound { .. } => StatusCode::NOT_FOUND,
            HandlerError::Malformed(_) | HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
            HandlerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let HandlerError::Store(source) = &self.0 {
            error!(error = %source, "record store failure");
        }
        let body = ErrorBody {
            message: self.0.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use todo_core::{Operation, StoreError, ValidationError};

    use super::*;

    #[test]
    fn status_per_variant() {
        let cases = [
            (
                HandlerError::not_found("x", Operation::Retrieve),
                StatusCode::NOT_FOUND,
            ),
            (
                HandlerError::Malformed("EOF".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ValidationError::null("complete").into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::new("pool closed").into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(ApiError(error).status(), expected);
        }
    }

    #[test]
    fn error_body_has_only_message() {
        let body = ErrorBody {
            message: "Todo con id x no existe".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Todo con id x no existe"}));
    }
}

//! Error types for the todo item handler.
//!
//! # Design
//! `HandlerError` is the full outcome taxonomy of a request that did not
//! produce a record. Not-found carries the operation because `GET` and `PUT`
//! report it with different wording. Store failures wrap whatever the backing
//! store raised so the boundary can log the chain and answer 500.

use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Message used when an error renders to an empty string.
pub const FALLBACK_MESSAGE: &str = "Unknown error occurred";

/// Which handler operation failed to find its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Retrieve,
    Update,
}

impl Operation {
    fn not_found_suffix(self) -> &'static str {
        match self {
            Operation::Retrieve => "no encontrado",
            Operation::Update => "no existe",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Retrieve => write!(f, "retrieve"),
            Operation::Update => write!(f, "update"),
        }
    }
}

/// A body that failed the update schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Offending field, or `this` for the payload itself.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn null(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{field} cannot be null"),
        }
    }

    pub fn type_mismatch(field: &str, expected: &str, actual: &Value) -> Self {
        Self {
            field: field.to_string(),
            message: format!(
                "{field} must be a `{expected}` type, but the final value was: `{actual}`."
            ),
        }
    }
}

/// Failure raised by a [`crate::store::TodoStore`] implementation.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct StoreError {
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl StoreError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Everything a handler operation can fail with.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// No record matches the requested id.
    #[error("Todo con id {id} {}", .operation.not_found_suffix())]
    NotFound { id: String, operation: Operation },

    /// The body is not parseable JSON.
    #[error("{0}")]
    Malformed(String),

    /// The body parsed but failed the update schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl HandlerError {
    pub fn not_found(id: &str, operation: Operation) -> Self {
        HandlerError::NotFound {
            id: id.to_string(),
            operation,
        }
    }

    /// The text shown to the client, never empty.
    pub fn client_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

//! The todo item request handler.
//!
//! # Design
//! `TodoItemHandler` sees only resolved values: a path id and the raw body
//! bytes. Each operation runs strictly in sequence (existence check, then
//! parse, then validation, then persistence) and returns a typed outcome the
//! HTTP layer maps to a status code.
//!
//! A record that vanishes between the existence check and the write is
//! reported as not-found (404), where the ORM-backed original surfaced its
//! "record not found" failure as a 400.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{HandlerError, Operation};
use crate::schema;
use crate::store::TodoStore;
use crate::types::Todo;

/// Fetch and update operations over a [`TodoStore`].
#[derive(Debug, Clone)]
pub struct TodoItemHandler<S> {
    store: S,
}

impl<S: TodoStore> TodoItemHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return the record with `id`.
    pub async fn retrieve(&self, id: &str) -> Result<Todo, HandlerError> {
        self.existing(id, Operation::Retrieve).await
    }

    /// Validate `body` and merge it into the record with `id`.
    ///
    /// The existence check runs first: a missing record is reported without
    /// looking at the body.
    pub async fn update(&self, id: &str, body: &[u8]) -> Result<Todo, HandlerError> {
        self.existing(id, Operation::Update).await?;

        let payload: Value = serde_json::from_slice(body).map_err(|e| {
            warn!(%id, error = %e, "rejected unparseable update body");
            HandlerError::Malformed(e.to_string())
        })?;
        let patch = schema::validate(&payload).inspect_err(|e| {
            warn!(%id, field = %e.field, "rejected invalid update body");
        })?;

        let updated = self
            .store
            .update(id, &patch)
            .await?
            .ok_or_else(|| HandlerError::not_found(id, Operation::Update))?;
        info!(%id, complete = ?patch.complete, description = ?patch.description, "todo updated");
        Ok(updated)
    }

    async fn existing(&self, id: &str, operation: Operation) -> Result<Todo, HandlerError> {
        match self.store.find_first(id).await? {
            Some(todo) => Ok(todo),
            None => {
                debug!(%id, %operation, "todo not found");
                Err(HandlerError::not_found(id, operation))
            }
        }
    }
}

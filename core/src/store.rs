//! Record store seam and an in-memory implementation.
//!
//! # Design
//! The handler only ever needs two queries: find the first record with a
//! given id, and merge a patch into the record with that id. Both return
//! `Ok(None)` when no row matches; absence is not a store failure.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::types::{Todo, TodoPatch};

/// Persistence operations used by [`crate::TodoItemHandler`].
pub trait TodoStore: Send + Sync {
    /// First record whose id equals `id`.
    fn find_first(&self, id: &str) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    /// Merge `patch` into the record keyed by `id` and return the result.
    fn update(
        &self,
        id: &str,
        patch: &TodoPatch,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;
}

/// Process-local store backed by a shared map. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, replacing any existing one with the same id.
    pub async fn insert(&self, todo: Todo) {
        self.todos.write().await.insert(todo.id.clone(), todo);
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

impl TodoStore for InMemoryTodoStore {
    async fn find_first(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        Ok(self.todos.read().await.get(id).cloned())
    }

    async fn update(&self, id: &str, patch: &TodoPatch) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        Ok(todos.get_mut(id).map(|todo| {
            todo.apply(patch);
            todo.clone()
        }))
    }
}

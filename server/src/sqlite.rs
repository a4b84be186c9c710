//! SQLite-backed [`TodoStore`].
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE todos (
//!     id TEXT PRIMARY KEY NOT NULL,
//!     description TEXT NOT NULL,
//!     complete BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! ```
//!
//! Updates are a single `UPDATE ... RETURNING` statement; `COALESCE` keeps
//! columns whose patch field is absent.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use todo_core::{StoreError, Todo, TodoPatch, TodoStore};

use crate::error::ServerError;

#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: String,
    description: String,
    complete: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            description: row.description,
            complete: row.complete,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    /// Open (creating if missing) the database at `url` and apply migrations.
    pub async fn connect(url: &str) -> Result<Self, ServerError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::migrated(pool).await
    }

    /// Private in-memory database. Pinned to one connection so every query
    /// sees the same data.
    pub async fn in_memory() -> Result<Self, ServerError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::migrated(pool).await
    }

    async fn migrated(pool: SqlitePool) -> Result<Self, ServerError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Seed a record. Not reachable over HTTP.
    pub async fn insert(&self, todo: &Todo) -> Result<(), ServerError> {
        sqlx::query("INSERT INTO todos (id, description, complete) VALUES (?, ?, ?)")
            .bind(&todo.id)
            .bind(&todo.description)
            .bind(todo.complete)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

impl TodoStore for SqliteTodoStore {
    async fn find_first(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, description, complete FROM todos WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::new)?;
        Ok(row.map(Todo::from))
    }

    async fn update(&self, id: &str, patch: &TodoPatch) -> Result<Option<Todo>, StoreError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET complete = COALESCE(?, complete), description = COALESCE(?, description)
            WHERE id = ?
            RETURNING id, description, complete
            "#,
        )
        .bind(patch.complete)
        .bind(patch.description.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::new)?;
        Ok(row.map(Todo::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with(todo: &Todo) -> SqliteTodoStore {
        let store = SqliteTodoStore::in_memory().await.unwrap();
        store.insert(todo).await.unwrap();
        store
    }

    #[tokio::test]
    async fn find_first_hit_and_miss() {
        let todo = Todo::new("Buy milk");
        let store = store_with(&todo).await;

        assert_eq!(store.find_first(&todo.id).await.unwrap(), Some(todo));
        assert_eq!(store.find_first("missing-1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_merges_present_fields() {
        let todo = Todo::new("Buy milk");
        let store = store_with(&todo).await;

        let patch = TodoPatch {
            complete: Some(true),
            description: None,
        };
        let updated = store.update(&todo.id, &patch).await.unwrap().unwrap();
        assert!(updated.complete);
        assert_eq!(updated.description, "Buy milk");

        let patch = TodoPatch {
            complete: None,
            description: Some("Buy oat milk".to_string()),
        };
        let updated = store.update(&todo.id, &patch).await.unwrap().unwrap();
        assert!(updated.complete);
        assert_eq!(updated.description, "Buy oat milk");
    }

    #[tokio::test]
    async fn empty_patch_returns_row_unchanged() {
        let todo = Todo::new("Buy milk");
        let store = store_with(&todo).await;

        let updated = store
            .update(&todo.id, &TodoPatch::default())
            .await
            .unwrap();
        assert_eq!(updated, Some(todo));
    }

    #[tokio::test]
    async fn update_missing_row_is_none() {
        let store = SqliteTodoStore::in_memory().await.unwrap();
        let patch = TodoPatch {
            complete: Some(true),
            description: None,
        };
        assert_eq!(store.update("missing-1", &patch).await.unwrap(), None);
    }

    #[tokio::test]
    async fn closed_pool_is_store_error() {
        let store = SqliteTodoStore::in_memory().await.unwrap();
        store.pool().close().await;
        assert!(store.find_first("any").await.is_err());
    }

    #[tokio::test]
    async fn duplicate_insert_fails() {
        let todo = Todo::new("Once");
        let store = store_with(&todo).await;
        assert!(matches!(
            store.insert(&todo).await,
            Err(ServerError::Database(_))
        ));
    }
}

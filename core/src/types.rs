//! Domain types for the todo item resource.
//!
//! # Design
//! `Todo` is the stored record as returned to clients. `TodoPatch` is the
//! validated form of an update body: every field is optional and `None`
//! leaves the stored column untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as held by the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub description: String,
    pub complete: bool,
}

impl Todo {
    /// Build an incomplete todo with a fresh UUIDv4 id.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            complete: false,
        }
    }

    /// Merge the present fields of `patch` into this record.
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(complete) = patch.complete {
            self.complete = complete;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }
}

/// Validated partial update. Produced by [`crate::schema::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub complete: Option<bool>,
    pub description: Option<String>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.complete.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: "abc".to_string(),
            description: "Test".to_string(),
            complete: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "abc", "description": "Test", "complete": false})
        );
    }

    #[test]
    fn new_todo_gets_uuid_id_and_starts_incomplete() {
        let todo = Todo::new("Walk dog");
        assert!(Uuid::parse_str(&todo.id).is_ok());
        assert_eq!(todo.description, "Walk dog");
        assert!(!todo.complete);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut todo = Todo::new("Walk dog");
        todo.apply(&TodoPatch {
            complete: Some(true),
            description: None,
        });
        assert!(todo.complete);
        assert_eq!(todo.description, "Walk dog");

        todo.apply(&TodoPatch {
            complete: None,
            description: Some("Walk cat".to_string()),
        });
        assert!(todo.complete);
        assert_eq!(todo.description, "Walk cat");
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut todo = Todo::new("Same");
        let before = todo.clone();
        let patch = TodoPatch::default();
        assert!(patch.is_empty());
        todo.apply(&patch);
        assert_eq!(todo, before);
    }
}

//! Framework-free core of the todo item resource.
//!
//! # Overview
//! Fetch-by-id and update-by-id for a single todo record. The handler takes
//! already-resolved inputs (the path id and raw body bytes) and returns typed
//! outcomes; the HTTP adapter in `todo-server` owns routing and status codes.
//!
//! # Design
//! - `TodoStore` is the only persistence seam: `find_first` and `update`.
//! - Update bodies are parsed to JSON, then validated by `schema::validate`
//!   into a `TodoPatch` before anything is written.
//! - Every failure is a `HandlerError` variant; nothing panics on user input.

pub mod error;
pub mod handler;
pub mod schema;
pub mod store;
pub mod types;

pub use error::{HandlerError, Operation, StoreError, ValidationError, FALLBACK_MESSAGE};
pub use handler::TodoItemHandler;
pub use store::{InMemoryTodoStore, TodoStore};
pub use types::{Todo, TodoPatch};

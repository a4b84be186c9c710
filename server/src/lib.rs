//! HTTP adapter for the todo item resource.
//!
//! Routes `GET` and `PUT` on `/todos/{id}` to a [`TodoItemHandler`]. Path
//! resolution and body extraction happen here; the handler only sees plain
//! values.

pub mod config;
pub mod error;
pub mod sqlite;

use std::future::Future;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use todo_core::{Todo, TodoItemHandler, TodoStore};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use config::Config;
pub use error::{ApiError, ErrorBody, ServerError};
pub use sqlite::SqliteTodoStore;

pub fn app<S>(store: S) -> Router
where
    S: TodoStore + Clone + 'static,
{
    Router::new()
        .route("/todos/{id}", get(get_todo::<S>).put(update_todo::<S>))
        .with_state(TodoItemHandler::new(store))
        .layer(TraceLayer::new_for_http())
}

/// Serve until the process exits.
pub async fn run<S>(listener: TcpListener, store: S) -> Result<(), std::io::Error>
where
    S: TodoStore + Clone + 'static,
{
    serve(listener, store, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<S, F>(listener: TcpListener, store: S, shutdown: F) -> Result<(), std::io::Error>
where
    S: TodoStore + Clone + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

async fn get_todo<S: TodoStore>(
    State(handler): State<TodoItemHandler<S>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = handler.retrieve(&id).await?;
    Ok(Json(todo))
}

async fn update_todo<S: TodoStore>(
    State(handler): State<TodoItemHandler<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let todo = handler.update(&id, &body).await?;
    Ok(Json(todo))
}

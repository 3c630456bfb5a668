//! Shared application state for all routes.

use crate::service::TodoStore;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Owned by the server; created at startup and dropped with it.
    pub todos: TodoStore,
}

impl AppState {
    pub fn new(pool: SqlitePool, todos: TodoStore) -> Self {
        AppState { pool, todos }
    }
}

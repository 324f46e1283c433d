//! Application state container shared across Axum route handlers and services.
//!
//! Handlers receive it through Axum's `State<T>` extractor. It is cheap to clone:
//! the database connection is a pooled handle.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an open database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for async contexts that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

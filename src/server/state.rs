//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through Axum's
//! state extraction. Sessions are provided by the session layer, not the state.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Clones share the same pool of connections to the SQLite database.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

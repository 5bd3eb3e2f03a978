//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds nothing but the database pool: requests share
//! no other in-process mutable state.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// `DatabaseConnection` is a connection pool; clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an open connection pool.
    ///
    /// Called once at startup, and by tests with an in-memory SQLite connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

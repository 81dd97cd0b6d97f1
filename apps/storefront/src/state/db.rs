//! # Database State
//!
//! Wraps the `Database` connection for use in hooks.
//!
//! The `Database` from `minqty-db` holds a `SqlitePool`, which is already
//! thread-safe, so hooks can run queries concurrently without locking.

use minqty_db::Database;

/// Wrapper around `Database` for hook state.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}

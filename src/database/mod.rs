// ABOUTME: SQLite database management over a sqlx connection pool
// ABOUTME: Handles connection setup, idempotent schema creation, and per-domain operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! Single-file SQLite persistence for user records. The pool provides scoped
//! connection acquisition per statement; every operation here is a single
//! statement, so statement-level atomicity is all the consistency the shell
//! needs.

mod users;

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

/// Database manager for user storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection pool and run schema setup
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema creation fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        // An in-memory SQLite database exists per connection; a pool larger
        // than one would hand out empty databases after migration.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run idempotent schema setup
    async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        Ok(())
    }
}

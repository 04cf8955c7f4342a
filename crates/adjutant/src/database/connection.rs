/*
 *  Copyright 2025-2026 Adjutant Contributors
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! SQLite connection management.
//!
//! Provides an async connection pool built on `deadpool-diesel`. SQLite has
//! limited concurrent write support even with WAL mode, so the pool holds a
//! single connection; writers across processes are serialized by SQLite's
//! own locking with a generous busy timeout.
//!
//! # Example
//!
//! ```rust,ignore
//! use adjutant::database::connection::Database;
//!
//! let db = Database::new("data/dashboard.db");
//! db.run_migrations().await?;
//! ```

use deadpool_diesel::sqlite::{Manager, Pool, Runtime};
use tracing::info;

use crate::error::StoreError;

/// A shared handle to the SQLite connection pool.
///
/// `Database` is `Clone`; each clone references the same underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Database(sqlite)")
    }
}

impl Database {
    /// Creates a new connection pool for the given connection string.
    ///
    /// Accepts a plain file path, `:memory:`, or a `sqlite://`-prefixed URL.
    ///
    /// # Panics
    ///
    /// Panics if the pool cannot be created.
    pub fn new(connection_string: &str) -> Self {
        let url = Self::build_sqlite_url(connection_string);
        let manager = Manager::new(url, Runtime::Tokio1);
        // A single connection avoids "database is locked" errors between
        // pooled writers in the same process.
        let pool = Pool::builder(manager)
            .max_size(1)
            .build()
            .expect("Failed to create SQLite connection pool");

        info!("SQLite connection pool initialized (size: 1)");

        Self { pool }
    }

    /// Returns a clone of the connection pool.
    pub fn pool(&self) -> Pool {
        self.pool.clone()
    }

    /// Gets a pooled connection.
    pub async fn get_connection(
        &self,
    ) -> Result<
        deadpool::managed::Object<Manager>,
        deadpool::managed::PoolError<deadpool_diesel::Error>,
    > {
        self.pool.get().await
    }

    /// Strips the optional `sqlite://` prefix.
    fn build_sqlite_url(connection_string: &str) -> String {
        if let Some(path) = connection_string.strip_prefix("sqlite://") {
            path.to_string()
        } else {
            connection_string.to_string()
        }
    }

    /// Runs pending migrations, setting concurrency pragmas first.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        use diesel_migrations::MigrationHarness;

        let conn = self
            .pool
            .get()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        conn.interact(|conn| {
            use diesel::prelude::*;

            // WAL mode allows concurrent reads during writes.
            diesel::sql_query("PRAGMA journal_mode=WAL;")
                .execute(conn)
                .map_err(|e| format!("Failed to set WAL mode: {}", e))?;
            // busy_timeout makes SQLite wait instead of immediately failing
            // when another process holds the write lock.
            diesel::sql_query("PRAGMA busy_timeout=30000;")
                .execute(conn)
                .map_err(|e| format!("Failed to set busy_timeout: {}", e))?;

            conn.run_pending_migrations(crate::database::MIGRATIONS)
                .map(|_| ())
                .map_err(|e| format!("Failed to run migrations: {}", e))
        })
        .await
        .map_err(|e| StoreError::ConnectionPool(e.to_string()))?
        .map_err(StoreError::Migration)?;

        Ok(())
    }
}

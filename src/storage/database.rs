// Basearch - GitHub repository browser core
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Database connection and management
//!
//! # Database Location
//! - macOS: ~/Library/Application Support/Basearch/cache.db
//! - Linux: ~/.local/share/Basearch/cache.db
//! - Windows: %APPDATA%/Basearch/cache.db
//!
//! # SQLite Configuration
//! - WAL mode for better concurrency
//! - Normal synchronous mode (balance safety/speed)

use crate::error::{BasearchError, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    ConnectOptions,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Local cache database - handles connection pooling and schema setup
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the cache database and run migrations
    ///
    /// # Errors
    /// Returns error if:
    /// - Parent directory doesn't exist and can't be created
    /// - Database file can't be opened
    /// - Migrations fail
    pub async fn new<P: AsRef<Path>>(database_path: P) -> Result<Self> {
        let path = database_path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let connection_string = format!("sqlite://{}?mode=rwc", path.display());
        let connect_opts = SqliteConnectOptions::from_str(&connection_string)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(30))
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(connect_opts)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Create in-memory database for testing
    pub async fn new_in_memory() -> Result<Self> {
        let connect_opts = SqliteConnectOptions::from_str("sqlite::memory:")?
            .disable_statement_logging();

        // Every connection to :memory: is a separate database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Apply all pending migrations
    pub async fn migrate(&self) -> Result<()> {
        crate::storage::migrations::run_migrations(&self.pool)
            .await
            .map_err(|e| BasearchError::MigrationFailed(e.to_string()))
    }

    /// Get reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close database and release all connections
    pub async fn close(self) {
        self.pool.close().await;
    }

    /// Get default database path for the platform
    pub fn get_default_path() -> PathBuf {
        #[cfg(target_os = "macos")]
        {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("Basearch")
                .join("cache.db")
        }

        #[cfg(target_os = "linux")]
        {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("Basearch")
                .join("cache.db")
        }

        #[cfg(target_os = "windows")]
        {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("Basearch").join("cache.db")
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            PathBuf::from("./cache.db")
        }
    }
}

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


//! Local cache storage
//!
//! SQLite via sqlx. The rest of the crate treats this as an opaque local data
//! source: the repository layer calls the query functions through
//! `api::safe_call`, so storage failures surface as error envelopes.
//!
//! # Database Schema
//! - Repos: cached search results
//! - Settings: key/value pairs, including the last sync date
//!
//! # Usage Example
//! ```no_run
//! use basearch_core::storage::{queries, Database};
//!
//! # async fn example() -> basearch_core::error::Result<()> {
//! let db = Database::new("./cache.db").await?;
//! let repos = queries::list_repos(db.pool()).await?;
//! let last_sync = queries::get_last_sync_date(db.pool()).await?;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod migrations;
pub mod queries;

pub use database::Database;

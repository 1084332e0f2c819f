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


//! Basearch core
//!
//! Fetches repositories and pull requests from GitHub, caches repositories
//! locally and turns every outcome into a presentation state.
//!
//! # Layers
//! - [`api`]: HTTP client, safe-call boundary and response classification
//! - [`storage`]: SQLite cache
//! - [`data`]: repository implementations over `api` and `storage`
//! - [`domain`]: entities, repository contracts and use cases
//! - [`presentation`]: view models emitting [`presentation::ViewState`]s
//!
//! # Example
//! ```no_run
//! use basearch_core::api::client::{ClientConfig, GithubClient};
//! use basearch_core::data::RepoRepositoryImpl;
//! use basearch_core::domain::usecases::GetReposUseCase;
//! use basearch_core::presentation::RepoListViewModel;
//! use basearch_core::storage::Database;
//! use std::sync::Arc;
//!
//! # async fn example() -> basearch_core::error::Result<()> {
//! let client = GithubClient::with_config(ClientConfig::from_env())?;
//! let db = Database::new(Database::get_default_path()).await?;
//! let repository = Arc::new(RepoRepositoryImpl::new(client, db));
//! let view_model = RepoListViewModel::new(Arc::new(GetReposUseCase::new(repository)));
//!
//! let mut states = view_model.subscribe();
//! view_model.load_repos(true);
//! while let Ok(state) = states.recv().await {
//!     println!("{:?}", state);
//!     if state.is_terminal() {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod data;
pub mod domain;
pub mod error;
pub mod presentation;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{BasearchError, Result};

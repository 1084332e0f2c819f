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


//! Repository contracts consumed by the use cases
//!
//! Every fetch returns a complete envelope; implementations are expected to
//! wrap their remote and local calls in `api::safe_call` so no failure
//! escapes as an `Err` or a panic.

use crate::api::client::GithubErrorBody;
use crate::api::envelope::{ErrorPayload, ResultEnvelope};
use crate::domain::entities::{PullRequest, Repo};
use async_trait::async_trait;

/// Envelope returned by repository fetches
pub type RepositoryResult<T> = ResultEnvelope<Vec<T>, ErrorPayload<GithubErrorBody>>;

/// Source of repositories, remote and cached
#[async_trait]
pub trait RepoRepository: Send + Sync {
    /// One page of repositories from the API, filtered by language
    async fn get_all_remote_repos(&self, page: u32, language: &str) -> RepositoryResult<Repo>;

    /// Repositories from the local cache
    async fn get_all_local_repos(&self) -> RepositoryResult<Repo>;

    /// Record the last successful sync. Fire-and-forget: failures are the
    /// implementation's to log.
    async fn save_last_sync_date(&self, value: &str);

    async fn get_last_sync_date(&self) -> Option<String>;
}

/// Source of pull requests
#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    async fn list_pull_requests(&self, owner: &str, repo_name: &str) -> RepositoryResult<PullRequest>;
}

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


//! Pull requests, remote only

use crate::api::client::{GithubClient, GithubErrorBody};
use crate::api::response::ErrorBodyPolicy;
use crate::api::safe_call::safe_api_call;
use crate::domain::entities::PullRequest;
use crate::domain::repository::{PullRequestRepository, RepositoryResult};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct PullRequestRepositoryImpl {
    client: GithubClient,
}

impl PullRequestRepositoryImpl {
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PullRequestRepository for PullRequestRepositoryImpl {
    async fn list_pull_requests(&self, owner: &str, repo_name: &str) -> RepositoryResult<PullRequest> {
        safe_api_call::<_, GithubErrorBody, _, _>(ErrorBodyPolicy::Decode, || {
            self.client.list_pull_requests(owner, repo_name)
        })
        .await
    }
}

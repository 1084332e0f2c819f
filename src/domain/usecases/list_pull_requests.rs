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


//! Pull request listing use case

use super::{flatten, UseCase, UseCaseResult};
use crate::domain::entities::PullRequest;
use crate::domain::repository::PullRequestRepository;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPullRequestsParams {
    pub owner: String,
    pub repo_name: String,
}

pub struct ListPullRequestsUseCase {
    repository: Arc<dyn PullRequestRepository>,
}

impl ListPullRequestsUseCase {
    pub fn new(repository: Arc<dyn PullRequestRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListPullRequestsUseCase {
    type Params = ListPullRequestsParams;
    type Output = UseCaseResult<PullRequest>;

    async fn run(&self, params: ListPullRequestsParams) -> UseCaseResult<PullRequest> {
        flatten(
            self.repository
                .list_pull_requests(&params.owner, &params.repo_name)
                .await,
        )
    }
}

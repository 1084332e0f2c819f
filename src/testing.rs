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


//! Hand-written fakes of the repository collaborators for unit tests

use crate::api::client::GithubErrorBody;
use crate::api::envelope::{ErrorPayload, ResultEnvelope};
use crate::api::status::StatusType;
use crate::domain::entities::{Owner, PullRequest, Repo, User};
use crate::domain::repository::{PullRequestRepository, RepoRepository, RepositoryResult};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Mutex;

/// Calls observed by the fakes, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Remote { page: u32, language: String },
    Local,
    SaveLastSyncDate(String),
    ListPullRequests { owner: String, repo_name: String },
}

pub struct FakeRepoRepository {
    remote: RepositoryResult<Repo>,
    local: RepositoryResult<Repo>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRepoRepository {
    pub fn new(remote: RepositoryResult<Repo>, local: RepositoryResult<Repo>) -> Self {
        Self {
            remote,
            local,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sync_writes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SaveLastSyncDate(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RepoRepository for FakeRepoRepository {
    async fn get_all_remote_repos(&self, page: u32, language: &str) -> RepositoryResult<Repo> {
        self.record(Call::Remote {
            page,
            language: language.to_string(),
        });
        self.remote.clone()
    }

    async fn get_all_local_repos(&self) -> RepositoryResult<Repo> {
        self.record(Call::Local);
        self.local.clone()
    }

    async fn save_last_sync_date(&self, value: &str) {
        self.record(Call::SaveLastSyncDate(value.to_string()));
    }

    async fn get_last_sync_date(&self) -> Option<String> {
        self.sync_writes().pop()
    }
}

pub struct FakePullRequestRepository {
    result: RepositoryResult<PullRequest>,
    calls: Mutex<Vec<Call>>,
}

impl FakePullRequestRepository {
    pub fn new(result: RepositoryResult<PullRequest>) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestRepository for FakePullRequestRepository {
    async fn list_pull_requests(&self, owner: &str, repo_name: &str) -> RepositoryResult<PullRequest> {
        self.calls.lock().unwrap().push(Call::ListPullRequests {
            owner: owner.to_string(),
            repo_name: repo_name.to_string(),
        });
        self.result.clone()
    }
}

pub fn repo(id: i64) -> Repo {
    Repo {
        id,
        name: format!("repo-{}", id),
        full_name: format!("owner/repo-{}", id),
        description: Some("A repository".to_string()),
        html_url: format!("https://github.com/owner/repo-{}", id),
        stargazers_count: 100 - id,
        forks_count: 1,
        owner: Owner {
            id: 10,
            login: "owner".to_string(),
            avatar_url: None,
        },
    }
}

pub fn pull_request(html_url: &str) -> PullRequest {
    PullRequest {
        id: 1,
        number: 7,
        title: "Add feature".to_string(),
        body: Some("Details".to_string()),
        html_url: html_url.to_string(),
        state: "open".to_string(),
        created_at: Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap(),
        user: User {
            id: 3,
            login: "octocat".to_string(),
            avatar_url: None,
        },
    }
}

/// Error envelope as the safe-call executor builds it for a caught failure
pub fn failure<T>(message: &str, status: StatusType) -> ResultEnvelope<Vec<T>, ErrorPayload<GithubErrorBody>> {
    ResultEnvelope::error(Some(ErrorPayload::from_message(message)), status)
}

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


//! View models
//!
//! Each launch emits `Loading` right away, then runs the fetch on its own
//! tokio task and emits exactly one terminal state. Launches are not
//! coalesced: two calls start two independent fetches.

use super::state::{project, ViewState};
use crate::domain::entities::{PullRequest, Repo};
use crate::domain::usecases::{
    GetReposParams, ListPullRequestsParams, UseCase, UseCaseResult,
};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::trace;

/// Buffered states per subscriber before the slowest one starts lagging
const STATE_CHANNEL_CAPACITY: usize = 32;

/// State channel shared by the list screens
pub struct ListViewModel<T> {
    states: broadcast::Sender<ViewState<T>>,
}

impl<T> ListViewModel<T>
where
    T: Clone + Send + 'static,
{
    pub fn new() -> Self {
        let (states, _) = broadcast::channel(STATE_CHANNEL_CAPACITY);
        Self { states }
    }

    /// Receive every state emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<ViewState<T>> {
        self.states.subscribe()
    }

    /// Emit `Loading`, then run `fetch` and emit its projected state
    ///
    /// Aborting the returned handle before `fetch` completes suppresses the
    /// terminal state.
    pub fn launch<F>(&self, fetch: F) -> JoinHandle<()>
    where
        F: Future<Output = UseCaseResult<T>> + Send + 'static,
    {
        emit(&self.states, ViewState::Loading);

        let states = self.states.clone();
        tokio::spawn(async move {
            let envelope = fetch.await;
            emit(&states, project(envelope));
        })
    }
}

impl<T> Default for ListViewModel<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

fn emit<T>(states: &broadcast::Sender<ViewState<T>>, state: ViewState<T>) {
    // No subscribers is not an error
    if states.send(state).is_err() {
        trace!("state emitted without subscribers");
    }
}

pub type RepoUseCase = dyn UseCase<Params = GetReposParams, Output = UseCaseResult<Repo>>;

pub type PullRequestUseCase =
    dyn UseCase<Params = ListPullRequestsParams, Output = UseCaseResult<PullRequest>>;

/// Repository list screen
pub struct RepoListViewModel {
    get_repos: Arc<RepoUseCase>,
    states: ListViewModel<Repo>,
}

impl RepoListViewModel {
    pub fn new(get_repos: Arc<RepoUseCase>) -> Self {
        Self {
            get_repos,
            states: ListViewModel::new(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewState<Repo>> {
        self.states.subscribe()
    }

    /// Load repos from the cache, or from the API when `force_sync` is set
    pub fn load_repos(&self, force_sync: bool) -> JoinHandle<()> {
        let get_repos = Arc::clone(&self.get_repos);
        self.states
            .launch(async move { get_repos.run(GetReposParams { force_sync }).await })
    }
}

/// Pull request list screen of one repository
pub struct PullRequestListViewModel {
    list_pull_requests: Arc<PullRequestUseCase>,
    states: ListViewModel<PullRequest>,
}

impl PullRequestListViewModel {
    pub fn new(list_pull_requests: Arc<PullRequestUseCase>) -> Self {
        Self {
            list_pull_requests,
            states: ListViewModel::new(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewState<PullRequest>> {
        self.states.subscribe()
    }

    pub fn load_pull_request_list(&self, owner: &str, repo_name: &str) -> JoinHandle<()> {
        let list_pull_requests = Arc::clone(&self.list_pull_requests);
        let params = ListPullRequestsParams {
            owner: owner.to_string(),
            repo_name: repo_name.to_string(),
        };
        self.states
            .launch(async move { list_pull_requests.run(params).await })
    }
}

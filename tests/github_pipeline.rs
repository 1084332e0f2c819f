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


//! End-to-end tests against a mock GitHub API on a random local port

use async_trait::async_trait;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use basearch_core::api::client::{ClientConfig, GithubClient};
use basearch_core::api::safe_call::safe_call;
use basearch_core::api::status::StatusType;
use basearch_core::data::{PullRequestRepositoryImpl, RepoRepositoryImpl};
use basearch_core::domain::entities::{PullRequest, Repo};
use basearch_core::domain::repository::{RepoRepository, RepositoryResult};
use basearch_core::domain::usecases::{GetReposParams, GetReposUseCase, ListPullRequestsUseCase, UseCase};
use basearch_core::presentation::{
    PullRequestListViewModel, RepoListViewModel, ViewState, FALLBACK_ERROR_MESSAGE,
};
use basearch_core::storage::Database;
use basearch_core::BasearchError;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

fn repo_json(id: i64, name: &str, stars: i64, html_url: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("square/{}", name),
        "description": "Square's library",
        "html_url": html_url,
        "stargazers_count": stars,
        "forks_count": 10,
        "language": "Kotlin",
        "owner": {"id": 82592, "login": "square", "avatar_url": null}
    })
}

async fn search_repositories(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("q").map(String::as_str) != Some("language:kotlin") {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"message": "Validation Failed"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "total_count": 2,
            "incomplete_results": false,
            "items": [repo_json(1, "okhttp", 45000, "http://x"),
                repo_json(2, "retrofit", 42000, "https://github.com/square/retrofit"),]
        })),
    )
}

async fn list_pulls(Path((owner, repo)): Path<(String, String)>) -> axum::response::Response {
    match owner.as_str() {
        "square" => Json(json!([{
            "id": 11,
            "number": 42,
            "title": format!("Improve {}", repo),
            "body": null,
            "html_url": "http://x",
            "state": "open",
            "created_at": "2020-01-02T03:04:05Z",
            "user": {"id": 7, "login": "octocat"}
        }]))
        .into_response(),
        "quiet" => Json(json!([])).into_response(),
        "nullbody" => (StatusCode::OK, "null").into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "<html>upstream error</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([])).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "message": "Repository missing",
                "documentation_url": "https://docs.github.com/rest"
            })),
        )
            .into_response(),
    }
}

async fn start_mock_github() -> SocketAddr {
    let app = Router::new()
        .route("/search/repositories", get(search_repositories))
        .route("/repos/{owner}/{repo}/pulls", get(list_pulls));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });
    addr
}

fn client(addr: SocketAddr, timeout: Duration) -> GithubClient {
    let config = ClientConfig::builder()
        .api_url(format!("http://{}", addr))
        .timeout(timeout)
        .build();
    GithubClient::with_config(config).unwrap()
}

/// Collect states up to and including the first terminal one
async fn collect<T: Clone>(states: &mut broadcast::Receiver<ViewState<T>>) -> Vec<ViewState<T>> {
    let mut seen = Vec::new();
    loop {
        let state = states.recv().await.unwrap();
        let terminal = state.is_terminal();
        seen.push(state);
        if terminal {
            return seen;
        }
    }
}

async fn load_pulls(addr: SocketAddr, timeout: Duration, owner: &str) -> Vec<ViewState<PullRequest>> {
    let repository = Arc::new(PullRequestRepositoryImpl::new(client(addr, timeout)));
    let view_model = PullRequestListViewModel::new(Arc::new(ListPullRequestsUseCase::new(repository)));
    let mut states = view_model.subscribe();

    view_model.load_pull_request_list(owner, "okhttp").await.unwrap();
    collect(&mut states).await
}

#[tokio::test]
async fn test_forced_sync_fetches_caches_and_records_sync() {
    let addr = start_mock_github().await;
    let db = Database::new_in_memory().await.unwrap();
    let repository = Arc::new(RepoRepositoryImpl::new(client(addr, Duration::from_secs(5)), db));
    let view_model = RepoListViewModel::new(Arc::new(GetReposUseCase::new(repository.clone())));
    let mut states = view_model.subscribe();

    view_model.load_repos(true).await.unwrap();
    let seen = collect(&mut states).await;

    assert_eq!(seen[0], ViewState::Loading);
    match &seen[1] {
        ViewState::Success { data } => {
            assert_eq!(data.len(), 2);
            assert_eq!(data[0].full_name, "square/okhttp");
            assert_eq!(data[0].html_url, "http://x");
        }
        other => panic!("unexpected state: {:?}", other),
    }
    assert!(repository.get_last_sync_date().await.is_some());

    // The cache now serves the same page
    view_model.load_repos(false).await.unwrap();
    let seen = collect(&mut states).await;
    match &seen[1] {
        ViewState::Success { data } => {
            let names: Vec<&str> = data.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, vec!["okhttp", "retrofit"]);
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_local_read_of_fresh_cache_is_empty() {
    let addr = start_mock_github().await;
    let db = Database::new_in_memory().await.unwrap();
    let repository = Arc::new(RepoRepositoryImpl::new(client(addr, Duration::from_secs(5)), db));
    let use_case = GetReposUseCase::new(repository.clone());

    let result = use_case.run(GetReposParams { force_sync: false }).await;

    assert_eq!(result.data().map(Vec::len), Some(0));
    assert_eq!(repository.get_last_sync_date().await, None);
}

#[tokio::test]
async fn test_pull_requests_success() {
    let addr = start_mock_github().await;

    let seen = load_pulls(addr, Duration::from_secs(5), "square").await;

    assert_eq!(seen[0], ViewState::Loading);
    match &seen[1] {
        ViewState::Success { data } => {
            assert_eq!(data[0].html_url, "http://x");
            assert_eq!(data[0].title, "Improve okhttp");
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_pull_request_list_is_empty_state() {
    let addr = start_mock_github().await;

    let seen = load_pulls(addr, Duration::from_secs(5), "quiet").await;

    assert_eq!(seen, vec![ViewState::Loading, ViewState::Empty]);
}

#[tokio::test]
async fn test_error_body_message_reaches_the_view() {
    let addr = start_mock_github().await;

    let seen = load_pulls(addr, Duration::from_secs(5), "nobody").await;

    assert_eq!(
        seen[1],
        ViewState::Error {
            message: "Repository missing".to_string(),
            status: StatusType::NotFound,
        }
    );
}

#[tokio::test]
async fn test_null_body_uses_fallback_message() {
    let addr = start_mock_github().await;

    let seen = load_pulls(addr, Duration::from_secs(5), "nullbody").await;

    assert_eq!(
        seen[1],
        ViewState::Error {
            message: FALLBACK_ERROR_MESSAGE.to_string(),
            status: StatusType::NullBody,
        }
    );
}

#[tokio::test]
async fn test_malformed_error_body_is_default_failure() {
    let addr = start_mock_github().await;

    let seen = load_pulls(addr, Duration::from_secs(5), "broken").await;

    match &seen[1] {
        ViewState::Error { status, message } => {
            assert_eq!(*status, StatusType::DefaultFailure);
            assert_ne!(message, FALLBACK_ERROR_MESSAGE);
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_server_is_socket_timeout() {
    let addr = start_mock_github().await;

    let seen = load_pulls(addr, Duration::from_millis(200), "slow").await;

    match &seen[1] {
        ViewState::Error { status, .. } => assert_eq!(*status, StatusType::SocketTimeout),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_refused_connection_is_connect_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let seen = load_pulls(addr, Duration::from_secs(5), "square").await;

    match &seen[1] {
        ViewState::Error { status, .. } => assert_eq!(*status, StatusType::ConnectFailure),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_sync_does_not_record_sync_date() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let db = Database::new_in_memory().await.unwrap();
    let repository = Arc::new(RepoRepositoryImpl::new(client(addr, Duration::from_secs(5)), db));
    let use_case = GetReposUseCase::new(repository.clone());

    let result = use_case.run(GetReposParams { force_sync: true }).await;

    assert_eq!(result.status(), StatusType::ConnectFailure);
    assert_eq!(repository.get_last_sync_date().await, None);
}

/// Repository whose cache sits behind a host that cannot be resolved
struct UnresolvableCache;

#[async_trait]
impl RepoRepository for UnresolvableCache {
    async fn get_all_remote_repos(&self, _page: u32, _language: &str) -> RepositoryResult<Repo> {
        panic!("remote read not expected");
    }

    async fn get_all_local_repos(&self) -> RepositoryResult<Repo> {
        safe_call(|| async { Err(BasearchError::UnknownHost("cache.internal".to_string())) }).await
    }

    async fn save_last_sync_date(&self, _value: &str) {
        panic!("sync date must not be written on a local read");
    }

    async fn get_last_sync_date(&self) -> Option<String> {
        None
    }
}

#[tokio::test]
async fn test_local_read_failure_reaches_view_as_unknown_host() {
    let use_case = GetReposUseCase::new(Arc::new(UnresolvableCache));
    let view_model = RepoListViewModel::new(Arc::new(use_case));
    let mut states = view_model.subscribe();

    view_model.load_repos(false).await.unwrap();
    let seen = collect(&mut states).await;

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], ViewState::Loading);
    match &seen[1] {
        ViewState::Error { status, message } => {
            assert_eq!(*status, StatusType::UnknownHost);
            assert_eq!(message, "Unable to resolve host: cache.internal");
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

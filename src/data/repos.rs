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


//! Repositories backed by the search API and the local cache

use crate::api::client::{GithubClient, GithubErrorBody};
use crate::api::envelope::ResultEnvelope;
use crate::api::response::ErrorBodyPolicy;
use crate::api::safe_call::{safe_api_call, safe_call};
use crate::domain::entities::Repo;
use crate::domain::repository::{RepoRepository, RepositoryResult};
use crate::storage::{queries, Database};
use async_trait::async_trait;
use tracing::{debug, warn};

/// [`RepoRepository`] over the GitHub API with a SQLite cache
///
/// A successful remote page replaces the cached repos, so a later local
/// read returns what was last fetched.
#[derive(Debug, Clone)]
pub struct RepoRepositoryImpl {
    client: GithubClient,
    db: Database,
}

impl RepoRepositoryImpl {
    pub fn new(client: GithubClient, db: Database) -> Self {
        Self { client, db }
    }

    async fn cache(&self, repos: &[Repo]) {
        match queries::replace_repos(self.db.pool(), repos).await {
            Ok(()) => debug!(count = repos.len(), "repos cached"),
            Err(e) => warn!(error = %e, "failed to cache repos"),
        }
    }
}

#[async_trait]
impl RepoRepository for RepoRepositoryImpl {
    async fn get_all_remote_repos(&self, page: u32, language: &str) -> RepositoryResult<Repo> {
        let envelope = safe_api_call::<_, GithubErrorBody, _, _>(ErrorBodyPolicy::Decode, || {
            self.client.search_repositories(page, language)
        })
        .await
        .map(|search| search.items);

        if let ResultEnvelope::Success { data, .. } = &envelope {
            self.cache(data).await;
        }

        envelope
    }

    async fn get_all_local_repos(&self) -> RepositoryResult<Repo> {
        safe_call(|| queries::list_repos(self.db.pool())).await
    }

    async fn save_last_sync_date(&self, value: &str) {
        if let Err(e) = queries::save_last_sync_date(self.db.pool(), value).await {
            warn!(error = %e, value, "failed to save last sync date");
        }
    }

    async fn get_last_sync_date(&self) -> Option<String> {
        match queries::get_last_sync_date(self.db.pool()).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "failed to read last sync date");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientConfig;
    use crate::api::status::StatusType;
    use crate::testing::repo;
    use std::net::TcpListener;
    use std::time::Duration;

    /// Client pointed at a local port nothing listens on
    fn unreachable_client() -> GithubClient {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ClientConfig::builder()
            .api_url(format!("http://{}", addr))
            .timeout(Duration::from_secs(5))
            .build();
        GithubClient::with_config(config).unwrap()
    }

    async fn repository() -> RepoRepositoryImpl {
        let db = Database::new_in_memory().await.unwrap();
        RepoRepositoryImpl::new(unreachable_client(), db)
    }

    #[tokio::test]
    async fn test_local_read_returns_cached_repos() {
        let repository = repository().await;
        queries::replace_repos(repository.db.pool(), &[repo(1), repo(2)])
            .await
            .unwrap();

        let envelope = repository.get_all_local_repos().await;

        assert_eq!(envelope.status(), StatusType::Ok);
        assert_eq!(envelope.data(), Some(&vec![repo(1), repo(2)]));
    }

    #[tokio::test]
    async fn test_local_read_of_empty_cache_is_success() {
        let repository = repository().await;

        let envelope = repository.get_all_local_repos().await;

        assert_eq!(envelope, ResultEnvelope::success(vec![]));
    }

    #[tokio::test]
    async fn test_local_read_failure_becomes_error_envelope() {
        let repository = repository().await;
        repository.db.pool().close().await;

        let envelope = repository.get_all_local_repos().await;

        assert!(!envelope.is_success());
        assert_eq!(envelope.status(), StatusType::DefaultFailure);
        assert!(envelope.error_payload().and_then(|p| p.error_message.as_ref()).is_some());
    }

    #[tokio::test]
    async fn test_refused_remote_leaves_cache_untouched() {
        let repository = repository().await;
        queries::replace_repos(repository.db.pool(), &[repo(4)]).await.unwrap();

        let envelope = repository.get_all_remote_repos(1, "kotlin").await;

        assert_eq!(envelope.status(), StatusType::ConnectFailure);
        assert_eq!(
            repository.get_all_local_repos().await.data(),
            Some(&vec![repo(4)])
        );
    }

    #[tokio::test]
    async fn test_last_sync_date_roundtrip() {
        let repository = repository().await;
        assert_eq!(repository.get_last_sync_date().await, None);

        repository.save_last_sync_date("2025-06-01 12:30:00").await;

        assert_eq!(
            repository.get_last_sync_date().await.as_deref(),
            Some("2025-06-01 12:30:00")
        );
    }

    #[tokio::test]
    async fn test_save_failure_is_swallowed() {
        let repository = repository().await;
        repository.db.pool().close().await;

        repository.save_last_sync_date("2025-06-01 12:30:00").await;
        assert_eq!(repository.get_last_sync_date().await, None);
    }
}

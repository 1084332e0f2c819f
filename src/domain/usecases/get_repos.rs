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


//! Repository listing use case
//!
//! A forced sync reads one page from the API and, when that page is not
//! empty, records the time of the sync. Otherwise the local cache is read
//! and nothing is written.

use super::{flatten, UseCase, UseCaseResult};
use crate::api::envelope::ResultEnvelope;
use crate::domain::entities::Repo;
use crate::domain::repository::RepoRepository;
use crate::domain::to_cache_format;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Page requested on a forced sync
pub const FIRST_PAGE: u32 = 1;

/// Language the remote listing is filtered by
pub const LANGUAGE_FILTER: &str = "kotlin";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetReposParams {
    /// Read from the API instead of the local cache
    pub force_sync: bool,
}

pub struct GetReposUseCase {
    repository: Arc<dyn RepoRepository>,
    clock: fn() -> DateTime<Utc>,
}

impl GetReposUseCase {
    pub fn new(repository: Arc<dyn RepoRepository>) -> Self {
        Self::with_clock(repository, Utc::now)
    }

    /// Same as [`GetReposUseCase::new`] with a fixed source of "now"
    pub fn with_clock(repository: Arc<dyn RepoRepository>, clock: fn() -> DateTime<Utc>) -> Self {
        Self { repository, clock }
    }

    async fn load_remote_data(&self) -> UseCaseResult<Repo> {
        let envelope = self
            .repository
            .get_all_remote_repos(FIRST_PAGE, LANGUAGE_FILTER)
            .await;

        match envelope {
            ResultEnvelope::Success { data, .. } if !data.is_empty() => {
                let synced_at = to_cache_format((self.clock)());
                self.repository.save_last_sync_date(&synced_at).await;
                info!(count = data.len(), %synced_at, "remote sync stored");
                ResultEnvelope::success(data)
            }
            other => flatten(other),
        }
    }

    async fn load_local_data(&self) -> UseCaseResult<Repo> {
        debug!("reading repos from local cache");
        flatten(self.repository.get_all_local_repos().await)
    }
}

#[async_trait]
impl UseCase for GetReposUseCase {
    type Params = GetReposParams;
    type Output = UseCaseResult<Repo>;

    async fn run(&self, params: GetReposParams) -> UseCaseResult<Repo> {
        if params.force_sync {
            self.load_remote_data().await
        } else {
            self.load_local_data().await
        }
    }
}

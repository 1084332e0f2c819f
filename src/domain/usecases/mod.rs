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


//! Use cases
//!
//! A use case takes explicit parameters, calls one repository and returns an
//! envelope whose error payload is a flat message. Response headers stop
//! here; error statuses are kept so the presentation layer can report them.

pub mod get_repos;
pub mod list_pull_requests;

pub use get_repos::{GetReposParams, GetReposUseCase};
pub use list_pull_requests::{ListPullRequestsParams, ListPullRequestsUseCase};

use crate::api::envelope::{DescribeError, ErrorPayload, ResultEnvelope};
use async_trait::async_trait;

/// Envelope handed to the presentation layer
pub type UseCaseResult<T> = ResultEnvelope<Vec<T>, String>;

/// A single business operation
#[async_trait]
pub trait UseCase: Send + Sync {
    type Params: Send + 'static;
    type Output: Send + 'static;

    async fn run(&self, params: Self::Params) -> Self::Output;
}

/// Drop headers and replace the structured error payload by its message
pub(crate) fn flatten<T, E: DescribeError>(
    envelope: ResultEnvelope<Vec<T>, ErrorPayload<E>>,
) -> UseCaseResult<T> {
    envelope
        .without_headers()
        .map_err(|payload| payload.and_then(ErrorPayload::flatten))
}

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


//! Repository implementations
//!
//! Remote reads go through [`GithubClient`](crate::api::client::GithubClient)
//! and local reads through the SQLite cache. Every call is wrapped in
//! `api::safe_call`, so the domain layer only ever sees envelopes.

pub mod pull_requests;
pub mod repos;

pub use pull_requests::PullRequestRepositoryImpl;
pub use repos::RepoRepositoryImpl;

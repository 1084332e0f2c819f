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


//! Presentation layer
//!
//! View models turn use-case envelopes into a stream of [`ViewState`]s.
//! Rendering those states is left to the embedding application.

pub mod state;
pub mod view_model;

pub use state::{project, ViewState, FALLBACK_ERROR_MESSAGE};
pub use view_model::{ListViewModel, PullRequestListViewModel, RepoListViewModel};

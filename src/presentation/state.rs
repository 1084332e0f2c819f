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


//! Presentation states

use crate::api::envelope::ResultEnvelope;
use crate::api::status::StatusType;
use crate::domain::usecases::UseCaseResult;

/// Shown when an error carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// State of a list screen
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Emitted before the fetch starts
    Loading,
    Success { data: Vec<T> },
    /// The fetch succeeded with no items
    Empty,
    Error { message: String, status: StatusType },
}

impl<T> ViewState<T> {
    /// Anything but `Loading`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

/// Project a finished fetch onto its terminal state
pub fn project<T>(envelope: UseCaseResult<T>) -> ViewState<T> {
    match envelope {
        ResultEnvelope::Success { data, .. } if data.is_empty() => ViewState::Empty,
        ResultEnvelope::Success { data, .. } => ViewState::Success { data },
        ResultEnvelope::Error { error, status, .. } => ViewState::Error {
            message: error.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            status,
        },
    }
}

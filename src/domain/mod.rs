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


//! Domain layer: entities, repository contracts and use cases
//!
//! Nothing here knows about HTTP or SQLite. Use cases talk to repositories
//! through the traits in [`repository`] and return flattened envelopes
//! (`ResultEnvelope<_, String>`) to the presentation layer.

pub mod entities;
pub mod repository;
pub mod usecases;

use chrono::{DateTime, Utc};

/// Format of timestamps stored in the local cache
pub const CACHE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp the way the cache stores it
pub fn to_cache_format(date: DateTime<Utc>) -> String {
    date.format(CACHE_DATE_FORMAT).to_string()
}

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


//! Remote access and result normalization
//!
//! Data flow for a remote call:
//! `client` (transport) → `safe_call` (catches failures) → `response`
//! (classifies completed responses) → `envelope::ResultEnvelope`.

pub mod client;
pub mod envelope;
pub mod response;
pub mod safe_call;
pub mod status;

pub use envelope::{DescribeError, ErrorPayload, Headers, ResultEnvelope};
pub use response::{classify, ErrorBodyPolicy, TransportResponse};
pub use safe_call::{classify_failure, safe_api_call, safe_call};
pub use status::StatusType;

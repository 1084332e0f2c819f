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


//! Completed transport responses and their classification
//!
//! # Design
//! `TransportResponse` describes a finished HTTP exchange as plain data, so
//! the classifier never touches the network and can be tested with
//! hand-built responses. The HTTP client (`api::client`) is the only place
//! that builds one from a live `reqwest::Response`.
//!
//! Classification is pure. A malformed error body is returned as `Err` and
//! left for the surrounding safe-call boundary to turn into data.

use crate::api::envelope::{ErrorPayload, Headers, ResultEnvelope};
use crate::api::status::StatusType;
use crate::error::Result;
use serde::de::DeserializeOwned;

/// Whether the caller expects a structured error body on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBodyPolicy {
    /// No error payload is expected; the raw error body is ignored
    Ignore,
    /// Decode a non-empty raw error body into the declared error type
    Decode,
}

/// An HTTP response described as plain data
#[derive(Debug, Clone)]
pub struct TransportResponse<S> {
    pub status: u16,
    /// Reason phrase of the status line (e.g. "Not Found")
    pub status_message: String,
    /// Headers in transport order; `None` marks a value that could not be read
    ///
    /// Names are kept as given. Responses built by `GithubClient` carry
    /// lowercase names, since `reqwest` normalizes them on receipt.
    pub headers: Vec<(String, Option<String>)>,
    /// Decoded body, only for successful responses that carried one
    pub body: Option<S>,
    /// Raw error body, only for unsuccessful responses
    pub error_body: Option<String>,
}

impl<S> TransportResponse<S> {
    /// 2xx responses are successful
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-sensitive header map; absent values become empty strings
    ///
    /// A repeated header name keeps its last value.
    pub fn header_map(&self) -> Headers {
        self.headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone().unwrap_or_default()))
            .collect()
    }
}

/// Turn a completed response into an envelope
///
/// - 2xx with a body → `Success` with the status looked up from the code
/// - 2xx without a body → `Error` with `NullBody` and no payload
/// - anything else → `Error` carrying the decoded error body (per `policy`)
///   and the response's status message
///
/// # Errors
/// Returns `Err` only if a non-empty error body fails to decode under
/// [`ErrorBodyPolicy::Decode`].
pub fn classify<S, E>(
    response: TransportResponse<S>,
    policy: ErrorBodyPolicy,
) -> Result<ResultEnvelope<S, ErrorPayload<E>>>
where
    E: DeserializeOwned,
{
    let headers = response.header_map();

    if response.is_successful() {
        // A 2xx without a body is reported as data, not as a failure
        return Ok(match response.body {
            Some(data) => ResultEnvelope::Success {
                data,
                headers,
                status: StatusType::from_code(response.status),
            },
            None => ResultEnvelope::Error {
                error: None,
                headers,
                status: StatusType::NullBody,
            },
        });
    }

    let parsed_error_body = match policy {
        ErrorBodyPolicy::Ignore => None,
        ErrorBodyPolicy::Decode => match response.error_body.as_deref() {
            Some(raw) if !raw.is_empty() => Some(serde_json::from_str::<E>(raw)?),
            _ => None,
        },
    };

    Ok(ResultEnvelope::Error {
        error: Some(ErrorPayload {
            parsed_error_body,
            error_message: Some(response.status_message),
        }),
        headers,
        status: StatusType::from_code(response.status),
    })
}

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


//! Result envelope shared by every layer
//!
//! An envelope is built once per call and never mutated. Crossing a layer
//! boundary re-wraps it with [`ResultEnvelope::map`] / [`ResultEnvelope::map_err`]
//! into a new envelope with a different payload type.

use crate::api::status::StatusType;
use std::collections::HashMap;

/// Response headers, keyed case-sensitively by header name
pub type Headers = HashMap<String, String>;

/// Either a success payload or an error payload, plus response metadata
#[derive(Debug, Clone, PartialEq)]
pub enum ResultEnvelope<S, E> {
    Success {
        data: S,
        headers: Headers,
        status: StatusType,
    },
    Error {
        error: Option<E>,
        headers: Headers,
        status: StatusType,
    },
}

impl<S, E> ResultEnvelope<S, E> {
    /// Success with no headers and `StatusType::Ok`
    pub fn success(data: S) -> Self {
        ResultEnvelope::Success {
            data,
            headers: Headers::new(),
            status: StatusType::Ok,
        }
    }

    /// Error with no headers and the given status
    pub fn error(error: Option<E>, status: StatusType) -> Self {
        ResultEnvelope::Error {
            error,
            headers: Headers::new(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResultEnvelope::Success { .. })
    }

    pub fn status(&self) -> StatusType {
        match self {
            ResultEnvelope::Success { status, .. } | ResultEnvelope::Error { status, .. } => *status,
        }
    }

    pub fn headers(&self) -> &Headers {
        match self {
            ResultEnvelope::Success { headers, .. } | ResultEnvelope::Error { headers, .. } => headers,
        }
    }

    /// Success payload, if any
    pub fn data(&self) -> Option<&S> {
        match self {
            ResultEnvelope::Success { data, .. } => Some(data),
            ResultEnvelope::Error { .. } => None,
        }
    }

    /// Error payload, if this is an error that carries one
    pub fn error_payload(&self) -> Option<&E> {
        match self {
            ResultEnvelope::Success { .. } => None,
            ResultEnvelope::Error { error, .. } => error.as_ref(),
        }
    }

    /// Re-wrap the success payload, keeping headers and status
    pub fn map<T, F>(self, f: F) -> ResultEnvelope<T, E>
    where
        F: FnOnce(S) -> T,
    {
        match self {
            ResultEnvelope::Success { data, headers, status } => ResultEnvelope::Success {
                data: f(data),
                headers,
                status,
            },
            ResultEnvelope::Error { error, headers, status } => {
                ResultEnvelope::Error { error, headers, status }
            }
        }
    }

    /// Re-wrap the error payload, keeping headers and status
    ///
    /// `f` sees the payload slot itself, so it may turn an absent payload
    /// into a present one and the other way round.
    pub fn map_err<F2, F>(self, f: F) -> ResultEnvelope<S, F2>
    where
        F: FnOnce(Option<E>) -> Option<F2>,
    {
        match self {
            ResultEnvelope::Success { data, headers, status } => {
                ResultEnvelope::Success { data, headers, status }
            }
            ResultEnvelope::Error { error, headers, status } => ResultEnvelope::Error {
                error: f(error),
                headers,
                status,
            },
        }
    }

    /// Drop the response metadata: success gets default headers and status,
    /// errors keep their status
    pub fn without_headers(self) -> Self {
        match self {
            ResultEnvelope::Success { data, .. } => ResultEnvelope::success(data),
            ResultEnvelope::Error { error, status, .. } => ResultEnvelope::error(error, status),
        }
    }
}

/// Error payload produced by the classifier and the safe-call executor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorPayload<E> {
    /// Decoded error body, when one was expected and present
    pub parsed_error_body: Option<E>,
    /// Status message of the response, or the failure's own message
    pub error_message: Option<String>,
}

impl<E> ErrorPayload<E> {
    pub fn from_message<S: Into<String>>(message: S) -> Self {
        Self {
            parsed_error_body: None,
            error_message: Some(message.into()),
        }
    }
}

/// Error body types that carry a human readable message of their own
pub trait DescribeError {
    fn describe(&self) -> Option<String>;
}

impl DescribeError for () {
    fn describe(&self) -> Option<String> {
        None
    }
}

impl<E: DescribeError> ErrorPayload<E> {
    /// Best-effort message: the structured body's message, else the
    /// payload's own message. Blank messages count as absent.
    pub fn flatten(self) -> Option<String> {
        self.parsed_error_body
            .and_then(|body| body.describe())
            .filter(|message| !message.trim().is_empty())
            .or_else(|| self.error_message.filter(|message| !message.trim().is_empty()))
    }
}

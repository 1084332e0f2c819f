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


//! Semantic status codes
//!
//! `StatusType` folds two code spaces into one closed set: HTTP status codes
//! reported by the server, and client-side outcomes that never produced a
//! usable response (transport failures, 2xx responses without a body).
//! Both lookups are total: any numeric code without a dedicated variant maps
//! to [`StatusType::DefaultFailure`].

use serde::{Deserialize, Serialize};

/// Semantic status attached to every result envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusType {
    // ===== HTTP =====
    Ok,
    Created,
    Accepted,
    NoContent,
    NotModified,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    UnprocessableEntity,
    TooManyRequests,
    /// Any 5xx
    ServerError,

    // ===== Client side =====
    /// 2xx response whose body was absent
    NullBody,
    SocketTimeout,
    UnknownHost,
    ConnectFailure,
    NoRouteToHost,
    IoFailure,
    /// Catch-all, also used for unknown numeric codes
    DefaultFailure,
}

impl StatusType {
    /// Look up the status for an HTTP status code
    pub fn from_code(code: u16) -> Self {
        match code {
            200 => Self::Ok,
            201 => Self::Created,
            202 => Self::Accepted,
            204 => Self::NoContent,
            304 => Self::NotModified,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            500..=599 => Self::ServerError,
            _ => Self::DefaultFailure,
        }
    }

    /// HTTP code for the HTTP variants; `None` for client-side statuses
    ///
    /// `ServerError` reports 500 since the exact 5xx code is not kept.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Ok => Some(200),
            Self::Created => Some(201),
            Self::Accepted => Some(202),
            Self::NoContent => Some(204),
            Self::NotModified => Some(304),
            Self::BadRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::MethodNotAllowed => Some(405),
            Self::Conflict => Some(409),
            Self::UnprocessableEntity => Some(422),
            Self::TooManyRequests => Some(429),
            Self::ServerError => Some(500),
            Self::NullBody
            | Self::SocketTimeout
            | Self::UnknownHost
            | Self::ConnectFailure
            | Self::NoRouteToHost
            | Self::IoFailure
            | Self::DefaultFailure => None,
        }
    }

    /// True for statuses produced by a transport failure rather than a response
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::SocketTimeout
                | Self::UnknownHost
                | Self::ConnectFailure
                | Self::NoRouteToHost
                | Self::IoFailure
        )
    }
}

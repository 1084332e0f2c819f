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


//! Error types for Basearch
//!
//! Every fallible function in the crate returns [`Result<T>`]. Errors only
//! travel as `Err` values up to the nearest safe-call boundary
//! (`api::safe_call`), where they are turned into an error envelope with a
//! semantic [`StatusType`](crate::api::StatusType). Nothing above that
//! boundary sees a `BasearchError` directly.
//!
//! # Transport failure taxonomy
//! The transport failures that receive their own status are modelled as
//! dedicated variants, so classification is a plain `match`:
//! - `Timeout` → `SocketTimeout`
//! - `UnknownHost` → `UnknownHost`
//! - `ConnectionRefused` → `ConnectFailure`
//! - `NoRouteToHost` → `NoRouteToHost`
//! - `IoError` → `IoFailure` (after inspecting the `io::ErrorKind`)
//!
//! `reqwest::Error` never reaches the safe-call boundary unclassified:
//! [`BasearchError::from_transport`] walks its source chain first.

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Result type alias using our BasearchError type
pub type Result<T> = std::result::Result<T, BasearchError>;

/// Main error type for Basearch
#[derive(Error, Debug)]
pub enum BasearchError {
    // ===== Transport Errors =====

    /// The request did not complete within the transport timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The host name could not be resolved
    #[error("Unable to resolve host: {0}")]
    UnknownHost(String),

    /// The remote end refused the connection
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    /// No route to the remote host or network
    #[error("No route to host: {0}")]
    NoRouteToHost(String),

    /// Any other HTTP client failure that carries no I/O cause
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    // ===== API Errors =====

    /// A 2xx response body could not be decoded into the expected type
    #[error("Invalid API response: {message}")]
    InvalidApiResponse {
        message: String,
        /// Response body snippet for debugging
        response_body: Option<String>,
    },

    // ===== Storage Errors =====

    /// Database schema migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    // ===== Configuration Errors =====

    /// Configuration is invalid or incomplete
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // ===== General Errors =====

    /// The guarded action panicked
    #[error("Operation panicked: {0}")]
    Panicked(String),

    // ===== External Library Errors =====

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// Database driver error from sqlx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl BasearchError {
    /// Classify a `reqwest::Error` into the transport taxonomy
    ///
    /// Timeouts are reported by reqwest directly. For everything else the
    /// source chain is searched for an `io::Error`, whose kind decides the
    /// variant. DNS failures surface from hyper as an error whose message
    /// starts with "dns error", so they are matched by text.
    pub fn from_transport(err: reqwest::Error) -> Self {
        let message = err.to_string();

        if err.is_timeout() {
            return BasearchError::Timeout(message);
        }

        if source_chain(&err).any(|e| is_dns_failure(&e.to_string())) {
            return BasearchError::UnknownHost(message);
        }

        if let Some(io_err) = source_chain(&err).find_map(|e| e.downcast_ref::<io::Error>()) {
            return match io_err.kind() {
                io::ErrorKind::TimedOut => BasearchError::Timeout(message),
                io::ErrorKind::ConnectionRefused => BasearchError::ConnectionRefused(message),
                io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
                    BasearchError::NoRouteToHost(message)
                }
                kind => BasearchError::IoError(io::Error::new(kind, message)),
            };
        }

        if err.is_connect() {
            return BasearchError::ConnectionRefused(message);
        }

        BasearchError::HttpClient(message)
    }

    /// Create an InvalidConfiguration error with a message
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        BasearchError::InvalidConfiguration(message.into())
    }

    /// Create an InvalidApiResponse error
    pub fn invalid_response<S: Into<String>>(message: S, response_body: Option<String>) -> Self {
        BasearchError::InvalidApiResponse {
            message: message.into(),
            response_body,
        }
    }

    /// Check if error happened while talking to the network
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            BasearchError::Timeout(_)
                | BasearchError::UnknownHost(_)
                | BasearchError::ConnectionRefused(_)
                | BasearchError::NoRouteToHost(_)
                | BasearchError::HttpClient(_)
                | BasearchError::IoError(_)
        )
    }

    /// Check if error is retryable (timeouts, refused or unreachable connections)
    ///
    /// Nothing in this crate retries; the flag is for callers that decide
    /// whether to offer a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BasearchError::Timeout(_)
                | BasearchError::ConnectionRefused(_)
                | BasearchError::NoRouteToHost(_)
        )
    }

    /// Get user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            BasearchError::Timeout(_) => {
                "The server took too long to respond. Please try again.".to_string()
            }
            BasearchError::UnknownHost(_) | BasearchError::NoRouteToHost(_) => {
                "No internet connection. Check your network and try again.".to_string()
            }
            BasearchError::ConnectionRefused(_) => {
                "The server is not accepting connections right now.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

fn source_chain<'a>(err: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |e| (*e).source())
}

fn is_dns_failure(message: &str) -> bool {
    message.starts_with("dns error") || message.contains("failed to lookup address")
}

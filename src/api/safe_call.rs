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


//! Safe-call boundary
//!
//! The only place where failures from the network or the local store are
//! converted into data. Both flavors always return an envelope:
//! - [`safe_api_call`] awaits a transport call, then classifies the response
//!   inside the same guard, so a malformed error body is caught here too.
//! - [`safe_call`] awaits an arbitrary local computation and wraps its value.
//!
//! Panics inside the guarded future are caught as well and reported as
//! [`StatusType::DefaultFailure`].

use crate::api::envelope::{ErrorPayload, ResultEnvelope};
use crate::api::response::{classify, ErrorBodyPolicy, TransportResponse};
use crate::api::status::StatusType;
use crate::error::{BasearchError, Result};
use futures_util::FutureExt;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::future::Future;
use std::io;
use std::panic::AssertUnwindSafe;
use tracing::warn;

/// Map a failure onto its status, most specific kind first
///
/// The specific transport variants and the specific `io::ErrorKind`s are
/// checked before the generic I/O fallback.
pub fn classify_failure(err: &BasearchError) -> StatusType {
    match err {
        BasearchError::Timeout(_) => StatusType::SocketTimeout,
        BasearchError::UnknownHost(_) => StatusType::UnknownHost,
        BasearchError::ConnectionRefused(_) => StatusType::ConnectFailure,
        BasearchError::NoRouteToHost(_) => StatusType::NoRouteToHost,
        BasearchError::IoError(io_err) => match io_err.kind() {
            io::ErrorKind::TimedOut => StatusType::SocketTimeout,
            io::ErrorKind::ConnectionRefused => StatusType::ConnectFailure,
            io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
                StatusType::NoRouteToHost
            }
            _ => StatusType::IoFailure,
        },
        _ => StatusType::DefaultFailure,
    }
}

/// Run a transport call and classify its response
///
/// Never fails: transport errors, error-body decode errors and panics all
/// end as an `Error` envelope with empty headers.
pub async fn safe_api_call<S, E, F, Fut>(
    policy: ErrorBodyPolicy,
    action: F,
) -> ResultEnvelope<S, ErrorPayload<E>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<TransportResponse<S>>>,
    E: DeserializeOwned,
{
    let guarded = async move {
        let response = action().await?;
        classify(response, policy)
    };

    match AssertUnwindSafe(guarded).catch_unwind().await {
        Ok(Ok(envelope)) => envelope,
        Ok(Err(err)) => failure_envelope(err),
        Err(panic) => failure_envelope(BasearchError::Panicked(panic_message(panic.as_ref()))),
    }
}

/// Run a local computation and wrap its value as `Success` with `Ok` status
pub async fn safe_call<S, E, F, Fut>(action: F) -> ResultEnvelope<S, ErrorPayload<E>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<S>>,
{
    let guarded = async move { action().await };

    match AssertUnwindSafe(guarded).catch_unwind().await {
        Ok(Ok(data)) => ResultEnvelope::success(data),
        Ok(Err(err)) => failure_envelope(err),
        Err(panic) => failure_envelope(BasearchError::Panicked(panic_message(panic.as_ref()))),
    }
}

fn failure_envelope<S, E>(err: BasearchError) -> ResultEnvelope<S, ErrorPayload<E>> {
    let status = classify_failure(&err);
    warn!(?status, error = %err, "call failed");
    ResultEnvelope::error(Some(ErrorPayload::from_message(err.to_string())), status)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

//! Ledgerly is a small web app for recording and browsing financial
//! transactions.
//!
//! This library provides a REST-style JSON API backed by an in-memory store
//! with simulated random failures, plus a server-rendered page (driven by
//! htmx) for working with the API during development. Nothing is persisted:
//! the store lives and dies with the process.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod routing;
mod state;
mod transaction;

pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use state::AppState;
pub use transaction::{
    CreateTransaction, FailureInjector, Transaction, TransactionId, TransactionStore,
};

use crate::{alert::Alert, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The failure injector decided this request should fail, simulating an
    /// unavailable backend.
    #[error("the backend is unavailable")]
    BackendUnavailable,

    /// The date filter was submitted without both a start and an end date.
    ///
    /// Filtering is all-or-nothing: a single date is not a range.
    #[error("Please select both start and end dates")]
    MissingDateRange,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the lock on the store or the failure injector.
    #[error("could not acquire the store lock")]
    StoreLock,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::MissingDateRange => Alert::error(Error::MissingDateRange.to_string())
                .into_response(StatusCode::BAD_REQUEST),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                Alert::error("Something went wrong, check the server logs for more details.")
                    .into_response(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

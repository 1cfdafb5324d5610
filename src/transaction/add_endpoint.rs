//! Defines the endpoint behind the page's Add Transaction button.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    alert::{Alert, clear_alert_container},
};

use super::{model::CreateTransaction, view::transaction_card};

/// A route handler that creates a transaction and returns its card.
///
/// There is no creation form: the button always submits the same fixed
/// payload, stamped with the current time. The button appends the returned
/// card to the grid (`hx-swap="beforeend"`); on a simulated outage an error
/// alert is rendered instead and routed to the banner.
pub async fn add_transaction_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    let mut failures = state
        .failures
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire failure injector lock: {error}"))
        .map_err(|_| Error::StoreLock)?;

    if failures.should_fail() {
        return Ok(Alert::error(format!(
            "Error adding transaction: {}",
            Error::BackendUnavailable
        ))
        .into_response(StatusCode::INTERNAL_SERVER_ERROR));
    }
    drop(failures);

    let mut store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLock)?;
    let transaction = store.create(CreateTransaction {
        description: "New Transaction".to_owned(),
        amount: 100.0,
        date: OffsetDateTime::now_utc(),
    });
    drop(store);

    Ok(html! {
        (transaction_card(&transaction))
        (clear_alert_container())
    }
    .into_response())
}

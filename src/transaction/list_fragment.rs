//! Defines the fragment endpoint that renders the transaction card grid.
//!
//! The page's filter form, sort selector, and initial load all fetch this
//! fragment, the same way the API's JSON clients fetch the list endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Query since that parses an empty string as None
// instead of rejecting the request like axum::Query. The date inputs are
// submitted empty until the user picks a date.
use axum_extra::extract::Query;
use maud::html;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    alert::{Alert, clear_alert_container},
};

use super::{
    store::{SortBy, TransactionQuery},
    view::transaction_cards,
};

/// The query parameters accepted by the card grid fragment.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFragmentParams {
    /// The first date to include.
    pub starting_date: Option<Date>,
    /// The last date to include.
    pub ending_date: Option<Date>,
    /// The field to sort by, either "date" or "amount". Anything else is
    /// ignored.
    pub sort_by: Option<String>,
    /// Set by a hidden input in the filter form. When true, submitting an
    /// incomplete date range is an error instead of an unfiltered fetch.
    pub require_dates: Option<bool>,
}

impl ListFragmentParams {
    fn has_complete_date_range(&self) -> bool {
        self.starting_date.is_some() && self.ending_date.is_some()
    }

    fn to_query(&self) -> TransactionQuery {
        // Filtering is all-or-nothing: a lone date is ignored.
        let date_range = match (self.starting_date, self.ending_date) {
            (Some(starting_date), Some(ending_date)) => Some(starting_date..=ending_date),
            _ => None,
        };

        TransactionQuery {
            date_range,
            sort_by: self.sort_by.as_deref().and_then(SortBy::from_param),
        }
    }
}

/// A route handler that renders the transaction cards for the given query.
///
/// On success the cards are returned in the order the store produced them
/// (the page never re-sorts), along with an out-of-band swap that clears the
/// alert banner. A simulated outage renders an error alert instead; the
/// requesting element routes it to the banner with `hx-target-error`, so the
/// cards already on the page stay put.
pub async fn get_transaction_list_fragment(
    State(state): State<AppState>,
    Query(params): Query<ListFragmentParams>,
) -> Result<Response, Error> {
    if params.require_dates.unwrap_or(false) && !params.has_complete_date_range() {
        return Err(Error::MissingDateRange);
    }

    let mut failures = state
        .failures
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire failure injector lock: {error}"))
        .map_err(|_| Error::StoreLock)?;

    if failures.should_fail() {
        return Ok(Alert::error(format!(
            "Error fetching transactions: {}",
            Error::BackendUnavailable
        ))
        .into_response(StatusCode::INTERNAL_SERVER_ERROR));
    }
    drop(failures);

    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLock)?;
    let transactions = store.query(params.to_query());
    drop(store);

    Ok(html! {
        (transaction_cards(&transactions))
        (clear_alert_container())
    }
    .into_response())
}

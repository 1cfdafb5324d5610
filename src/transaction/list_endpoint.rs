//! Defines the JSON endpoint for listing transactions.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Query since that parses an empty string as None
// instead of rejecting the request like axum::Query.
use axum_extra::extract::Query;
use serde::Deserialize;
use time::Date;

use crate::{AppState, Error};

use super::store::{SortBy, TransactionQuery};

/// The query parameters accepted when listing transactions.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListParams {
    /// The first date to include, e.g. "2023-12-01".
    pub starting_date: Option<Date>,
    /// The last date to include, e.g. "2023-12-20".
    pub ending_date: Option<Date>,
    /// The field to sort by, either "date" or "amount". Anything else is
    /// ignored.
    pub sort_by: Option<String>,
}

impl TransactionListParams {
    pub(crate) fn to_query(&self) -> TransactionQuery {
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

/// A route handler that returns transactions as a JSON array, optionally
/// filtered to a date range and sorted.
///
/// Like every request to the simulated backend, this one may fail: the
/// failure injector is consulted first, and a simulated outage is a bare 500
/// with an empty body.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
    Query(params): Query<TransactionListParams>,
) -> Result<Response, Error> {
    let mut failures = state
        .failures
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire failure injector lock: {error}"))
        .map_err(|_| Error::StoreLock)?;

    if failures.should_fail() {
        tracing::debug!("simulating an outage for a transaction list request");
        return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
    }
    drop(failures);

    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLock)?;
    let transactions = store.query(params.to_query());

    Ok(Json(transactions).into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use axum_extra::extract::Query;
    use time::macros::date;

    use crate::{
        AppState, FailureInjector, Transaction, TransactionStore,
        transaction::store::SortBy,
    };

    use super::{TransactionListParams, list_transactions_endpoint};

    fn reliable_state() -> AppState {
        AppState::new(TransactionStore::with_seed_data(), FailureInjector::new(0.0))
    }

    async fn get_transactions(
        state: AppState,
        params: TransactionListParams,
    ) -> Vec<Transaction> {
        let response = list_transactions_endpoint(State(state), Query(params))
            .await
            .expect("handler should not error");

        assert_eq!(response.status(), axum::http::StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        serde_json::from_slice(&body).expect("Could not parse response body as JSON")
    }

    #[tokio::test]
    async fn returns_all_transactions_without_params() {
        let transactions =
            get_transactions(reliable_state(), TransactionListParams::default()).await;

        assert_eq!(
            transactions.len(),
            3,
            "got {} transactions, want the full seed data",
            transactions.len()
        );
    }

    #[tokio::test]
    async fn filters_to_the_inclusive_date_range() {
        let params = TransactionListParams {
            starting_date: Some(date!(2023 - 12 - 01)),
            ending_date: Some(date!(2023 - 12 - 20)),
            sort_by: None,
        };

        let transactions = get_transactions(reliable_state(), params).await;

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "Groceries");
    }

    #[tokio::test]
    async fn a_lone_date_does_not_filter() {
        let params = TransactionListParams {
            starting_date: Some(date!(2023 - 12 - 01)),
            ending_date: None,
            sort_by: None,
        };

        let transactions = get_transactions(reliable_state(), params).await;

        assert_eq!(transactions.len(), 3);
    }

    #[tokio::test]
    async fn sorts_by_descending_amount() {
        let params = TransactionListParams {
            starting_date: None,
            ending_date: None,
            sort_by: Some("amount".to_owned()),
        };

        let transactions = get_transactions(reliable_state(), params).await;

        let amounts: Vec<f64> = transactions
            .iter()
            .map(|transaction| transaction.amount)
            .collect();
        assert_eq!(amounts, [3000.0, 500.0, 100.0]);
    }

    #[tokio::test]
    async fn unrecognized_sort_by_is_ignored() {
        let params = TransactionListParams {
            starting_date: None,
            ending_date: None,
            sort_by: Some("color".to_owned()),
        };

        let transactions = get_transactions(reliable_state(), params).await;

        let ids: Vec<i64> = transactions.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, [1, 2, 3], "want store order when sortBy is unrecognized");
    }

    #[tokio::test]
    async fn simulated_outage_returns_500_with_empty_body() {
        let state = AppState::new(TransactionStore::with_seed_data(), FailureInjector::new(1.0));

        let response =
            list_transactions_endpoint(State(state), Query(TransactionListParams::default()))
                .await
                .expect("handler should not error");

        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        assert!(body.is_empty(), "want an empty body, got {body:?}");
    }

    #[test]
    fn params_build_the_expected_query() {
        let params = TransactionListParams {
            starting_date: Some(date!(2023 - 12 - 01)),
            ending_date: Some(date!(2023 - 12 - 20)),
            sort_by: Some("date".to_owned()),
        };

        let query = params.to_query();

        assert_eq!(
            query.date_range,
            Some(date!(2023 - 12 - 01)..=date!(2023 - 12 - 20))
        );
        assert_eq!(query.sort_by, Some(SortBy::Date));
    }
}

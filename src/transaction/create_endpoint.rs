//! Defines the JSON endpoint for creating a new transaction.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error};

use super::model::CreateTransaction;

/// A route handler that creates a transaction from the posted payload and
/// returns it, with its newly assigned ID, as JSON with status 201.
///
/// The failure injector is consulted before anything else: a simulated
/// outage is a bare 500 with an empty body and the store is left untouched.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Json(dto): Json<CreateTransaction>,
) -> Result<Response, Error> {
    let mut failures = state
        .failures
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire failure injector lock: {error}"))
        .map_err(|_| Error::StoreLock)?;

    if failures.should_fail() {
        tracing::debug!("simulating an outage for a create transaction request");
        return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
    }
    drop(failures);

    let mut store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLock)?;
    let transaction = store.create(dto);

    Ok((StatusCode::CREATED, Json(transaction)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{Json, extract::State, http::StatusCode};
    use time::macros::datetime;

    use crate::{AppState, FailureInjector, Transaction, TransactionStore};

    use super::{CreateTransaction, create_transaction_endpoint};

    fn test_dto() -> CreateTransaction {
        CreateTransaction {
            description: "New Transaction".to_owned(),
            amount: 100.0,
            date: datetime!(2025-06-15 12:00 UTC),
        }
    }

    #[tokio::test]
    async fn returns_created_transaction_with_next_id() {
        let state = AppState::new(TransactionStore::with_seed_data(), FailureInjector::new(0.0));

        let response = create_transaction_endpoint(State(state), Json(test_dto()))
            .await
            .expect("handler should not error");

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        let transaction: Transaction =
            serde_json::from_slice(&body).expect("Could not parse response body as JSON");
        assert_eq!(transaction.id, 4, "want the ID after the three seeded ones");
        assert_eq!(transaction.description, "New Transaction");
        assert_eq!(transaction.amount, 100.0);
    }

    #[tokio::test]
    async fn each_created_transaction_gets_a_larger_id() {
        let state = AppState::new(TransactionStore::new(), FailureInjector::new(0.0));
        let mut last_id = 0;

        for _ in 0..3 {
            let response = create_transaction_endpoint(State(state.clone()), Json(test_dto()))
                .await
                .expect("handler should not error");
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("Could not get response body");
            let transaction: Transaction =
                serde_json::from_slice(&body).expect("Could not parse response body as JSON");

            assert!(
                transaction.id > last_id,
                "got ID {}, want an ID greater than {last_id}",
                transaction.id
            );
            last_id = transaction.id;
        }
    }

    #[tokio::test]
    async fn simulated_outage_leaves_the_store_untouched() {
        let state = AppState::new(TransactionStore::with_seed_data(), FailureInjector::new(1.0));

        let response = create_transaction_endpoint(State(state.clone()), Json(test_dto()))
            .await
            .expect("handler should not error");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        assert!(body.is_empty(), "want an empty body, got {body:?}");

        let store = state.store.lock().unwrap();
        assert_eq!(store.count(), 3, "a failed request must not create anything");
    }
}

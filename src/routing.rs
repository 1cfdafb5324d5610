//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    transaction::{
        add_transaction_endpoint, create_transaction_endpoint, get_transaction_list_fragment,
        get_transactions_page, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_LIST_FRAGMENT,
            get(get_transaction_list_fragment),
        )
        .route(endpoints::ADD_TRANSACTION, post(add_transaction_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

//! The application's route URIs.

/// The transactions page, which is the only page in the app.
pub const ROOT: &str = "/";
/// The JSON API route for listing and creating transactions.
pub const TRANSACTIONS_API: &str = "/api/v1/transactions";
/// The route that returns the transaction card grid as an HTML fragment.
pub const TRANSACTION_LIST_FRAGMENT: &str = "/fragments/transactions";
/// The route the Add Transaction button posts to.
pub const ADD_TRANSACTION: &str = "/transactions";

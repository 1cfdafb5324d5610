//! Defines the core data models for transactions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The integer type used for transaction IDs.
///
/// IDs are assigned by the store and increase monotonically, so a newly
/// created transaction always has a larger ID than every earlier one.
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are immutable once created: the application offers no edit or
/// delete operations.
///
/// On the wire, `date` is an RFC 3339 string (the ISO 8601 profile emitted by
/// JavaScript's `Date.toJSON`), so the JSON shape is
/// `{"id": 1, "description": "Groceries", "amount": 100.0, "date": "2023-12-17T03:24:00Z"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The payload for creating a transaction: a [Transaction] without an ID.
///
/// The ID is assigned by the store when the transaction is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

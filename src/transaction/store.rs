//! The in-memory transaction store that backs the API.

use std::ops::RangeInclusive;

use time::{Date, macros::datetime};

use super::model::{CreateTransaction, Transaction, TransactionId};

/// The field to sort transactions by in a [TransactionQuery].
///
/// Both orders are descending, matching the API's `sortBy` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Most recent transactions first.
    Date,
    /// Largest amounts first.
    Amount,
}

impl SortBy {
    /// Parse the `sortBy` query parameter.
    ///
    /// Unrecognized values are treated the same as an absent parameter so
    /// that clients sending garbage get the unsorted list rather than an
    /// error.
    pub fn from_param(value: &str) -> Option<SortBy> {
        match value {
            "date" => Some(SortBy::Date),
            "amount" => Some(SortBy::Amount),
            _ => None,
        }
    }
}

/// Defines which transactions to fetch from [TransactionStore::query], and in
/// what order.
#[derive(Debug, Default)]
pub struct TransactionQuery {
    /// Include transactions whose calendar date falls within `date_range`
    /// (inclusive). `None` returns all transactions.
    pub date_range: Option<RangeInclusive<Date>>,
    /// Orders transactions by the given field, descending. `None` returns
    /// transactions in the order they were created.
    pub sort_by: Option<SortBy>,
}

/// Holds transactions in memory and assigns their IDs.
///
/// The store owns the ID counter, so IDs are unique and monotonically
/// increasing for the lifetime of the store. Nothing is persisted: restarting
/// the server starts over from the seed data.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    id_counter: TransactionId,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            id_counter: 0,
        }
    }

    /// Create a store pre-populated with a few transactions for development.
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();

        for (description, amount, date) in [
            ("Groceries", 100.0, datetime!(2023-12-17 03:24 UTC)),
            ("Gas", 3000.0, datetime!(2023-12-21 03:24 UTC)),
            ("Restaurant", 500.0, datetime!(2024-12-01 03:24 UTC)),
        ] {
            store.create(CreateTransaction {
                description: description.to_owned(),
                amount,
                date,
            });
        }

        store
    }

    /// Create a new transaction from `dto`, assigning it the next ID.
    pub fn create(&mut self, dto: CreateTransaction) -> Transaction {
        self.id_counter += 1;

        let transaction = Transaction {
            id: self.id_counter,
            description: dto.description,
            amount: dto.amount,
            date: dto.date,
        };
        self.transactions.push(transaction.clone());

        transaction
    }

    /// Retrieve transactions in the way defined by `query`.
    ///
    /// The sorts are stable, so repeated queries with identical parameters
    /// against an unchanged store return identical ordered results.
    pub fn query(&self, query: TransactionQuery) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = match &query.date_range {
            Some(date_range) => self
                .transactions
                .iter()
                .filter(|transaction| date_range.contains(&transaction.date.date()))
                .cloned()
                .collect(),
            None => self.transactions.clone(),
        };

        match query.sort_by {
            Some(SortBy::Date) => transactions.sort_by(|a, b| b.date.cmp(&a.date)),
            Some(SortBy::Amount) => {
                transactions.sort_by(|a, b| b.amount.total_cmp(&a.amount));
            }
            None => {}
        }

        transactions
    }

    /// The number of transactions in the store.
    pub fn count(&self) -> usize {
        self.transactions.len()
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

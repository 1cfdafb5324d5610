//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::transaction::{FailureInjector, TransactionStore};

/// The state shared by the app's route handlers.
///
/// The store and the failure injector are constructed explicitly at startup
/// and injected here, so tests can build a state with whatever seed data and
/// failure behavior they need instead of sharing hidden globals.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory transaction store.
    pub(crate) store: Arc<Mutex<TransactionStore>>,
    /// Decides which requests fail with a simulated outage.
    pub(crate) failures: Arc<Mutex<FailureInjector>>,
}

impl AppState {
    /// Create a new [AppState] from a store and a failure injector.
    pub fn new(store: TransactionStore, failures: FailureInjector) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            failures: Arc::new(Mutex::new(failures)),
        }
    }
}

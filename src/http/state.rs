//! Application state for the HTTP server.

use crate::services::DatasetStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store holding the last successfully processed dataset
    pub store: DatasetStore,
}

impl AppState {
    /// Create a new application state with the given dataset store.
    pub fn new(store: DatasetStore) -> Self {
        Self { store }
    }
}

//! Application state for the HTTP server.

use crate::data::DataStore;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
}

impl AppState {
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

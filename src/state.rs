//! Shared application state.

use std::sync::Arc;

use crate::services::account_store::AccountStore;

/// State handed to every handler through axum's `State` extractor.
///
/// Cloning is cheap; all clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

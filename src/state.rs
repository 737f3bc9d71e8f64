//! Shared application state for all routes.

use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Process-wide persistence handle; the only thing requests share.
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}

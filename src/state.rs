use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::ProductStore;

/// Shared application state
///
/// Owns the product store explicitly instead of hiding it behind process
/// globals; handlers receive it through axum's `State` extractor.
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Product store (shared across requests)
    pub store: ProductStore,
}

impl AppState {
    /// Create new application state with an empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: ProductStore::new(),
        }
    }
}

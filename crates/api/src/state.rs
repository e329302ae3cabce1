use std::sync::Arc;

use sponsorlink_db::KeyValueStore;

use crate::config::ServerConfig;
use crate::enhance::DescriptionEnhancer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Backing store for the event and inquiry collections.
    pub store: Arc<dyn KeyValueStore>,
    pub config: Arc<ServerConfig>,
    pub enhancer: Arc<DescriptionEnhancer>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: ServerConfig) -> Self {
        let enhancer = Arc::new(DescriptionEnhancer::new(config.gemini.clone()));
        Self {
            store,
            config: Arc::new(config),
            enhancer,
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}

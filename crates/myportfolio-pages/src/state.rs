//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::{self, ProfileStore};
use crate::template::TemplateStore;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Profile record store, built once at startup.
    pub store: Arc<dyn ProfileStore>,

    /// Profile page template on disk.
    pub template: TemplateStore,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// Fails if the configured record store cannot be set up, for example when
    /// the service account key is not a valid PEM.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = store::connect(&config.store)?;

        tracing::info!(
            store = config.store.kind(),
            template = %config.template_path.display(),
            "application state initialized"
        );

        Ok(Self::with_store(config, store))
    }

    /// Create state around an already constructed store.
    pub fn with_store(config: Config, store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            template: TemplateStore::new(config.template_path.clone()),
            config: Arc::new(config),
        }
    }
}

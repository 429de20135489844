use std::sync::Arc;

use anyhow::{Context, Result};
use hoalog_core::site_config::SiteConfig;
use hoalog_core::store::EventStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // The data source is read-only, so it is loaded once at startup
    store: Arc<EventStore>,
    config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let store = EventStore::from_config(&config).context("Could not load timeline data")?;
        tracing::info!(events = store.len(), "timeline loaded");
        Ok(Self::from_parts(store, config))
    }

    pub fn from_parts(store: EventStore, config: SiteConfig) -> Self {
        AppState {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

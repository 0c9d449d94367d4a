//! Application state shared across handlers

use crate::config::Settings;
use crate::engines::{CatalogLoader, CatalogProvider};
use crate::router::QueryRouter;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Query router; reloads the catalog per search
    pub router: QueryRouter,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create state that loads the catalog from the configured source
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let loader = CatalogLoader::from_settings(&settings)?;
        Self::with_provider(settings, Arc::new(loader))
    }

    /// Create state around an arbitrary catalog provider
    pub fn with_provider(
        settings: Settings,
        provider: Arc<dyn CatalogProvider>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            router: QueryRouter::new(provider),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    /// Public base URL without a trailing slash
    pub fn base_url(&self) -> String {
        match self.settings.server.base_url {
            Some(ref url) => url.trim_end_matches('/').to_string(),
            None => format!(
                "http://{}:{}",
                self.settings.server.bind_address, self.settings.server.port
            ),
        }
    }
}

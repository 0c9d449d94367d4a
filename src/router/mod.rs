//! Query routing
//!
//! Resolves a query to a target URL: an explicit `!shortcut` picks its
//! engine, anything else (including an unknown shortcut) goes to a random
//! engine with the full original text.

mod format;

pub use format::{encode_uri_component, format_search_url};

use crate::engines::{CatalogProvider, EngineCatalog, EngineDescriptor};
use crate::error::RouteError;
use crate::query::ParsedQuery;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info};

/// How the engine was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Shortcut,
    Random,
}

/// A resolved search ready for navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub engine: EngineDescriptor,
    /// Query text substituted into the template
    pub query: String,
    /// Final target URL
    pub url: String,
    pub selection: Selection,
}

/// Resolve a parsed query against a catalog
pub fn resolve<R: Rng + ?Sized>(
    catalog: &EngineCatalog,
    parsed: &ParsedQuery,
    rng: &mut R,
) -> Result<Resolution, RouteError> {
    if catalog.is_empty() {
        return Err(RouteError::NoEngines);
    }

    if let Some(engine) = parsed.shortcut().and_then(|s| catalog.select_by_shortcut(s)) {
        return Ok(Resolution {
            url: format_search_url(engine, &parsed.remaining),
            engine: engine.clone(),
            query: parsed.remaining.clone(),
            selection: Selection::Shortcut,
        });
    }

    let engine = catalog.select_random(rng).ok_or(RouteError::NoEngines)?;
    Ok(Resolution {
        url: format_search_url(engine, &parsed.raw_query),
        engine: engine.clone(),
        query: parsed.raw_query.clone(),
        selection: Selection::Random,
    })
}

/// Result of performing a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Leave the page for the resolved URL
    Navigate(Resolution),
    /// Stay on the page; nothing was searched
    Idle(IdleReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleReason {
    EmptyQuery,
    NoEngines,
}

/// Performs searches against a freshly loaded catalog
#[derive(Clone)]
pub struct QueryRouter {
    provider: Arc<dyn CatalogProvider>,
}

impl QueryRouter {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Load the current catalog
    pub async fn catalog(&self) -> EngineCatalog {
        self.provider.load().await
    }

    /// Resolve `query` to a navigation target, reloading the catalog first
    pub async fn route(&self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            debug!("Empty query, nothing to search");
            return SearchOutcome::Idle(IdleReason::EmptyQuery);
        }

        let catalog = self.provider.load().await;
        let parsed = ParsedQuery::parse(query);

        let resolved = resolve(&catalog, &parsed, &mut rand::thread_rng());
        match resolved {
            Ok(resolution) => {
                info!(
                    engine = %resolution.engine.name,
                    selection = ?resolution.selection,
                    "Redirecting to {}",
                    resolution.url
                );
                SearchOutcome::Navigate(resolution)
            }
            Err(e) => {
                error!("{}", e);
                SearchOutcome::Idle(IdleReason::NoEngines)
            }
        }
    }
}

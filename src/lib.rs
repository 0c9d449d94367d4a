//! randsearch: a search redirector
//!
//! Each query goes to a randomly chosen engine from a JSON catalog, unless
//! it starts with `!shortcut`, in which case the matching engine is used.
//! The catalog is reloaded for every search.

pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod query;
pub mod router;
pub mod web;

pub use config::Settings;
pub use engines::{CatalogLoader, EngineCatalog, EngineDescriptor};
pub use error::{CatalogError, RouteError};
pub use query::ParsedQuery;
pub use router::{format_search_url, QueryRouter, Resolution, SearchOutcome};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Error types for randsearch

use thiserror::Error;

/// Failure to obtain or decode the engine catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading a local catalog file failed
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request for a remote catalog failed
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote catalog answered with a non-success status
    #[error("catalog request returned HTTP {0}")]
    Status(u16),

    /// The document is not `{ "engines": [...] }`
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to route a query to an engine
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("No search engines available")]
    NoEngines,
}

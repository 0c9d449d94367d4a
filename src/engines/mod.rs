//! Search engine module
//!
//! Engine descriptors, the catalog they are loaded into, and the loader
//! that fetches the catalog from its configured source.

mod catalog;
mod descriptor;
mod loader;

pub use catalog::EngineCatalog;
pub use descriptor::{EngineDescriptor, InvalidEntry, PLACEHOLDER};
pub use loader::{parse_catalog, CatalogLoader, CatalogProvider, CatalogSource};

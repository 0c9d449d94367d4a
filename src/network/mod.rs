//! HTTP networking module
//!
//! Provides the outgoing HTTP client used to fetch remote catalogs.

mod client;

pub use client::{FetchedDocument, HttpClient};

//! Catalog loader: fetches the engines document from a file or URL

use super::catalog::EngineCatalog;
use super::descriptor::EngineDescriptor;
use crate::config::Settings;
use crate::error::CatalogError;
use crate::network::HttpClient;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, warn};
use url::Url;

/// Anything that can produce a fresh engine catalog
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load the catalog. Failures yield an empty catalog.
    async fn load(&self) -> EngineCatalog;
}

/// A fixed in-memory catalog
#[async_trait]
impl CatalogProvider for EngineCatalog {
    async fn load(&self) -> EngineCatalog {
        self.clone()
    }
}

/// Location of the engines document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(Url),
}

impl CatalogSource {
    /// Interpret a configured source: http(s) URLs are fetched, anything else is a path
    pub fn parse(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Http(url),
            _ => Self::File(PathBuf::from(source)),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{}", url),
        }
    }
}

/// Top-level shape of the engines document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    engines: Vec<serde_json::Value>,
}

/// Loads the catalog from its source on every call
pub struct CatalogLoader {
    source: CatalogSource,
    client: HttpClient,
}

impl CatalogLoader {
    pub fn new(source: CatalogSource, client: HttpClient) -> Self {
        Self { source, client }
    }

    /// Build a loader from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        Ok(Self::new(CatalogSource::parse(&settings.catalog.source), client))
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Load the catalog, surfacing the failure reason
    pub async fn try_load(&self) -> Result<EngineCatalog, CatalogError> {
        let text = match &self.source {
            CatalogSource::File(path) => tokio::fs::read_to_string(path).await?,
            CatalogSource::Http(url) => {
                let doc = self.client.get(url.as_str()).await?;
                if !doc.is_success() {
                    return Err(CatalogError::Status(doc.status));
                }
                doc.text
            }
        };

        let catalog = parse_catalog(&text)?;
        debug!("Loaded {} engines from {}", catalog.len(), self.source);
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogProvider for CatalogLoader {
    async fn load(&self) -> EngineCatalog {
        match self.try_load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Error loading search engines from {}: {}", self.source, e);
                EngineCatalog::empty()
            }
        }
    }
}

/// Parse an engines document, dropping malformed entries
pub fn parse_catalog(text: &str) -> Result<EngineCatalog, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(text)?;

    let engines = document
        .engines
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match EngineDescriptor::from_value(value) {
            Ok(engine) => Some(engine),
            Err(e) => {
                warn!("Skipping catalog entry {}: {}", index, e);
                None
            }
        })
        .collect::<Vec<_>>();

    Ok(EngineCatalog::new(engines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DOCUMENT: &str = r#"{
        "engines": [
            { "name": "DuckDuckGo", "shortcut": "ddg", "urlTemplate": "https://duckduckgo.com/?q=%s" },
            { "name": "Broken", "shortcut": 3, "urlTemplate": "https://example.com/?q=%s" },
            { "name": "GitHub", "shortcut": "gh", "urlTemplate": "https://github.com/search?q=%s" },
            "not an object",
            { "name": "", "shortcut": "x", "urlTemplate": "https://example.com/?q=%s" }
        ]
    }"#;

    fn loader(source: CatalogSource) -> CatalogLoader {
        CatalogLoader::new(source, HttpClient::new().unwrap())
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            CatalogSource::parse("engines.json"),
            CatalogSource::File(PathBuf::from("engines.json"))
        );
        assert_eq!(
            CatalogSource::parse("/etc/randsearch/engines.json"),
            CatalogSource::File(PathBuf::from("/etc/randsearch/engines.json"))
        );
        assert!(matches!(
            CatalogSource::parse("https://example.org/engines.json"),
            CatalogSource::Http(_)
        ));
    }

    #[test]
    fn test_parse_catalog_drops_malformed_entries() {
        let catalog = parse_catalog(DOCUMENT).unwrap();
        let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["DuckDuckGo", "GitHub"]);
    }

    #[test]
    fn test_parse_catalog_rejects_wrong_document() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Parse(_))));
        assert!(matches!(
            parse_catalog(r#"{"engines": {}}"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(parse_catalog("not json"), Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let catalog = loader(CatalogSource::File(file.path().to_path_buf()))
            .load()
            .await;
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let loader = loader(CatalogSource::File(dir.path().join("engines.json")));

        assert!(matches!(loader.try_load().await, Err(CatalogError::Io(_))));
        assert!(loader.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/engines.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(DOCUMENT))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/engines.json", server.uri())).unwrap();
        let catalog = loader(CatalogSource::Http(url)).load().await;
        assert_eq!(catalog.len(), 2);
        assert!(catalog.select_by_shortcut("gh").is_some());
    }

    #[tokio::test]
    async fn test_http_error_status_yields_empty_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/engines.json"))
            .respond_with(ResponseTemplate::new(500).set_body_string(DOCUMENT))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/engines.json", server.uri())).unwrap();
        let loader = loader(CatalogSource::Http(url));

        assert!(matches!(loader.try_load().await, Err(CatalogError::Status(500))));
        assert!(loader.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_http_invalid_json_yields_empty_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/engines.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/engines.json", server.uri())).unwrap();
        assert!(loader(CatalogSource::Http(url)).load().await.is_empty());
    }
}

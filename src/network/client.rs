//! HTTP client for fetching remote engine catalogs

use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// Body and status of a completed GET request
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub status: u16,
    pub text: String,
}

impl FetchedDocument {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client wrapper configured from [`OutgoingSettings`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .gzip(true)
            .brotli(true);

        // No timeout unless one is configured
        if let Some(secs) = settings.request_timeout {
            builder = builder.timeout(Duration::from_secs_f64(secs));
        }

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Simple GET request returning the response body as text
    pub async fn get(&self, url: &str) -> reqwest::Result<FetchedDocument> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(FetchedDocument { status, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_proxy_rejected() {
        let mut settings = OutgoingSettings::default();
        settings.proxies.all = Some("not a url".to_string());
        assert!(HttpClient::with_settings(&settings).is_err());
    }
}

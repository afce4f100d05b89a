use crate::config::SourceConfig;
use crate::error::{Result, SourceError};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Networking capability the host is expected to provide. Operations only
/// ever issue plain GETs and consume the body as text, so that is the
/// whole surface.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

/// Default transport backed by reqwest, used when the adapter runs outside
/// a host that brings its own networking (tests, the CLI harness).
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: SourceConfig,
}

impl HttpClient {
    pub fn new(config: SourceConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("kksource/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[async_trait::async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<String> {
        let mut request = self.client.get(url);

        if let Some(user_agent) = &self.config.user_agent {
            request = request.header("User-Agent", user_agent);
        }

        if let Some(headers) = &self.config.headers {
            for (key, value) in headers {
                request = request.header(key, value);
            }
        }

        let response = request.send().await?;
        debug!("GET {} -> {}", url, response.status());

        if !response.status().is_success() {
            return Err(SourceError::Http(response.error_for_status().unwrap_err()));
        }

        let text = response.text().await?;
        Ok(text)
    }
}

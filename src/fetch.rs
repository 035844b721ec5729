// src/fetch.rs

//! Page retrieval.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::CrawlConfig;
use crate::error::Result;

/// Trait for page retrieval backends.
///
/// Implementations apply their own bounded timeout so that a single
/// unreachable host cannot stall a whole crawl.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the response body of `url` as text.
    ///
    /// Network failures, timeouts and non-2xx statuses are all reported
    /// uniformly as errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with User-Agent and timeout from the configuration.
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

//! HTTP fetcher for downloading blocklists.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{Config, Source};
use crate::error::FetchError;
use crate::parser::{parse_hosts, DomainSet};
use crate::utils::format_count_with_separator;

/// Outcome of fetching and parsing one source
#[derive(Debug)]
pub struct SourceReport {
    pub source: Source,
    pub result: Result<DomainSet, FetchError>,
}

impl SourceReport {
    /// Domains contributed by this source (empty on failure)
    pub fn domain_count(&self) -> usize {
        self.result.as_ref().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Anything that can return the raw text behind a source URL.
#[async_trait]
pub trait ListSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP client for fetching lists
pub struct Fetcher {
    client: Client,
    max_size: u64,
}

impl Fetcher {
    /// Create a fetcher using the timeout and size cap from `config`
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("hostagg/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            max_size: config.max_source_bytes,
        })
    }
}

#[async_trait]
impl ListSource for Fetcher {
    /// Single attempt, no retry. Non-2xx and oversized bodies are errors.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let mut response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_size {
                return Err(FetchError::TooLarge {
                    size: content_length,
                    max: self.max_size,
                });
            }
        }

        // Content-Length may be absent (chunked) or wrong; stop reading at the cap
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            let size = (body.len() + chunk.len()) as u64;
            if size > self.max_size {
                return Err(FetchError::TooLarge {
                    size,
                    max: self.max_size,
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Fetch and parse a single source, never failing the caller.
pub async fn fetch_source<S: ListSource + ?Sized>(client: &S, source: &Source) -> SourceReport {
    info!("Fetching {}...", source.label());

    let result = client.fetch_text(&source.url).await.map(|text| parse_hosts(&text));

    match &result {
        Ok(domains) => info!(
            "  -> Found {} domains.",
            format_count_with_separator(domains.len())
        ),
        Err(e) if e.is_timeout() => warn!("Timed out fetching {}: {}", source.label(), e),
        Err(e) => warn!("Error fetching {}: {}", source.label(), e),
    }

    SourceReport {
        source: source.clone(),
        result,
    }
}

/// Fetch every source one after another, in configured order.
pub async fn fetch_all<S: ListSource + ?Sized>(
    client: &S,
    sources: &[Source],
) -> Vec<SourceReport> {
    let mut reports = Vec::with_capacity(sources.len());
    for source in sources {
        reports.push(fetch_source(client, source).await);
    }
    reports
}

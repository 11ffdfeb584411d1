use async_trait::async_trait;
use fs_core::{ContentExtractor, Error, ExtractedContent, Result};
use reqwest::Client;
use tracing::{debug, error, warn};

pub mod fallback;
pub mod jsonld;
pub mod readability;

const USER_AGENT: &str = concat!("Mozilla/5.0 (compatible; FlipSide/", env!("CARGO_PKG_VERSION"), ")");

/// Extracts article text with Readability, falling back to plain selectors.
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    client: Client,
}

impl ArticleExtractor {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Downloads the page and runs Readability over it. Any non-success
    /// status counts as a failure.
    pub async fn extract_primary(&self, url: &str) -> Result<ExtractedContent> {
        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        readability::parse(&html, url)
    }

    /// Downloads the page again and scrapes it with plain selectors. The
    /// response status is not checked; only a failed fetch is an error.
    pub async fn extract_fallback(&self, url: &str) -> Result<ExtractedContent> {
        let html = match self.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                error!("❌ Failed to scrape {}: {}", url, e);
                return Err(Error::Scraping(format!("Failed to scrape article: {}", e)));
            }
        };
        Ok(fallback::parse(&html, url))
    }

    async fn fetch(&self, url: &str) -> std::result::Result<String, reqwest::Error> {
        self.client.get(url).send().await?.text().await
    }
}

#[async_trait]
impl ContentExtractor for ArticleExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractedContent> {
        match self.extract_primary(url).await {
            Ok(content) => {
                debug!("Readability extracted {} chars from {}", content.content.len(), url);
                Ok(content)
            }
            Err(e) => {
                warn!("⚠️ Readability failed for {}: {}. Falling back to selector scraping", url, e);
                self.extract_fallback(url).await
            }
        }
    }
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use super::*;
    use scraper::{Html, Selector};

    pub fn extract_text(document: &Html, selector: &str) -> Result<String> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector: {}", e)))?;

        document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .ok_or_else(|| Error::Scraping(format!("No element found for selector: {:?}", selector)))
    }

    pub fn extract_texts(document: &Html, selector: &str) -> Result<Vec<String>> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector: {}", e)))?;

        Ok(document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect())
    }
}

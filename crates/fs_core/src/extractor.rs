use async_trait::async_trait;
use crate::types::ExtractedContent;
use crate::Result;

#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Fetch a page and pull out its title and body text
    async fn extract(&self, url: &str) -> Result<ExtractedContent>;
}

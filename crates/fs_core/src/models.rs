use async_trait::async_trait;
use crate::types::AiAnalysis;
use crate::Result;

#[async_trait]
pub trait InferenceModel: Send + Sync {
    fn name(&self) -> &str;

    /// Produce a summary with pro and con points for an article body
    async fn analyze_article(&self, content: &str) -> Result<AiAnalysis>;

    /// Produce a short phrase naming what an article is about
    async fn extract_topic(&self, content: &str) -> Result<String>;
}

use fs_core::config::DEFAULT_LOOKBACK_DAYS;
use fs_core::{
    classify_bias, AnalysisResponse, Article, Bias, ContentExtractor, CounterArticle,
    CounterArticleSearch, InferenceModel, Result, SearchOutcome,
};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs one analysis request end to end.
///
/// Extraction, the main analysis and topic extraction are fatal. The
/// counter-article branch is best effort and never fails the request.
pub struct AnalysisPipeline {
    extractor: Arc<dyn ContentExtractor>,
    model: Arc<dyn InferenceModel>,
    search: Arc<dyn CounterArticleSearch>,
    lookback_days: i64,
}

impl fmt::Debug for AnalysisPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisPipeline")
            .field("extractor", &"<dyn ContentExtractor>")
            .field("model", &self.model.name())
            .field("search", &self.search.name())
            .field("lookback_days", &self.lookback_days)
            .finish()
    }
}

impl AnalysisPipeline {
    pub fn new(
        extractor: Arc<dyn ContentExtractor>,
        model: Arc<dyn InferenceModel>,
        search: Arc<dyn CounterArticleSearch>,
    ) -> Self {
        Self {
            extractor,
            model,
            search,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    pub fn with_lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days;
        self
    }

    pub async fn analyze(&self, url: &str) -> Result<AnalysisResponse> {
        info!("🔎 Analyzing {}", url);

        let extracted = self.extractor.extract(url).await?;
        let bias = classify_bias(url);
        let ai_analysis = self.model.analyze_article(&extracted.content).await?;
        let topic = self.model.extract_topic(&extracted.content).await?;
        info!("Classified {} as {} (topic: {:?})", url, bias, topic);

        let counter_article = self.find_counter_article(&topic, bias.opposite()).await;

        Ok(AnalysisResponse {
            original_article: Article::new(extracted, bias, topic),
            ai_analysis,
            counter_article,
        })
    }

    async fn find_counter_article(&self, topic: &str, bias: Bias) -> Option<CounterArticle> {
        let candidate = match self.search.search(topic, bias, self.lookback_days).await {
            SearchOutcome::Found(candidate) => candidate,
            SearchOutcome::NoMatch => {
                info!("No {} counter-article found for {:?}", bias, topic);
                return None;
            }
            SearchOutcome::Failed(e) => {
                warn!("⚠️ Counter-article search via {} failed: {}", self.search.name(), e);
                return None;
            }
        };

        match self.model.analyze_article(&candidate.content).await {
            Ok(analysis) => Some(CounterArticle::new(candidate, analysis)),
            Err(e) => {
                warn!("⚠️ Could not analyze counter-article {:?}: {}", candidate.title, e);
                None
            }
        }
    }
}

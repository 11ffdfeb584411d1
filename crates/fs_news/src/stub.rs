use async_trait::async_trait;
use fs_core::{Bias, CounterArticleSearch, CounterCandidate, SearchOutcome};

pub const STUB_URL: &str = "https://example.com/counter-article";
pub const STUB_SOURCE: &str = "Example News";

/// Search that always "finds" a canned article. Needs no API key, so the
/// service can run end to end during development.
#[derive(Debug, Default, Clone)]
pub struct StubNewsSearch;

impl StubNewsSearch {
    pub fn new() -> Self {
        Self
    }

    pub fn counter_article(topic: &str, bias: Bias) -> CounterCandidate {
        CounterCandidate {
            title: format!("Counter Article About {}", topic),
            content: format!(
                "This is a sample counter article about {} from a {}-leaning source.",
                topic, bias
            ),
            url: Some(STUB_URL.to_string()),
            source: STUB_SOURCE.to_string(),
            bias,
        }
    }
}

#[async_trait]
impl CounterArticleSearch for StubNewsSearch {
    fn name(&self) -> &str {
        "Stub"
    }

    async fn search(&self, topic: &str, bias: Bias, _days: i64) -> SearchOutcome {
        SearchOutcome::Found(Self::counter_article(topic, bias))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Political leaning of a news source, assigned by static lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Left,
    Center,
    Right,
}

impl Bias {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::Left => "left",
            Bias::Center => "center",
            Bias::Right => "right",
        }
    }

    /// The bias a counter-article is searched for.
    ///
    /// Center sources have no natural opposite and are paired with right-leaning
    /// counter-articles.
    pub fn opposite(&self) -> Bias {
        match self {
            Bias::Left => Bias::Right,
            Bias::Right => Bias::Left,
            Bias::Center => Bias::Right,
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

/// Title and body text pulled out of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub title: String,
    pub content: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(skip_serializing, default)]
    pub content: String,
    pub source: String,
    pub bias: Bias,
    pub topic: String,
}

impl Article {
    pub fn new(extracted: ExtractedContent, bias: Bias, topic: String) -> Self {
        Self {
            title: extracted.title,
            content: extracted.content,
            source: extracted.source,
            bias,
            topic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// A search hit from a source matching the requested bias, before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterCandidate {
    pub title: String,
    pub content: String,
    pub url: Option<String>,
    pub source: String,
    pub bias: Bias,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterArticle {
    pub title: String,
    pub content: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
    pub bias: Bias,
    pub ai_analysis: AiAnalysis,
}

impl CounterArticle {
    pub fn new(candidate: CounterCandidate, ai_analysis: AiAnalysis) -> Self {
        Self {
            title: candidate.title,
            content: candidate.content,
            source: candidate.source,
            url: candidate.url,
            bias: candidate.bias,
            ai_analysis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub original_article: Article,
    pub ai_analysis: AiAnalysis,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub counter_article: Option<CounterArticle>,
}

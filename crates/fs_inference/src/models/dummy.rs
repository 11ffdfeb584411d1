use async_trait::async_trait;
use fs_core::{AiAnalysis, InferenceModel, Result};
use std::fmt;

use crate::analysis::MAX_POINTS;

const DUMMY_CONS: [&str; MAX_POINTS] = [
    "Generated offline without a language model",
    "Opposing viewpoints were not evaluated",
    "Claims in the article were not checked",
];

/// Offline model for development: answers from the article text itself.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

fn sentences(content: &str) -> Vec<&str> {
    content
        .split(|c| c == '.' || c == '!' || c == '?')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn analyze_article(&self, content: &str) -> Result<AiAnalysis> {
        let sentences = sentences(content);
        let summary = sentences
            .iter()
            .take(MAX_POINTS)
            .map(|s| format!("{}.", s))
            .collect::<Vec<_>>()
            .join(" ");
        let pros = sentences
            .iter()
            .take(MAX_POINTS)
            .map(|s| format!("States that {}", s))
            .collect();

        Ok(AiAnalysis {
            summary,
            pros,
            cons: DUMMY_CONS.iter().map(|c| c.to_string()).collect(),
        })
    }

    async fn extract_topic(&self, content: &str) -> Result<String> {
        // First five words of the article
        let topic = content
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .take(5)
            .collect::<Vec<_>>()
            .join(" ");

        if topic.is_empty() {
            return Ok("news".to_string());
        }
        Ok(topic)
    }
}

use async_trait::async_trait;
use crate::types::{Bias, CounterCandidate};
use crate::Error;

/// Result of a counter-article search.
///
/// `NoMatch` means the search ran and nothing qualified; `Failed` means the
/// upstream could not be queried. Callers that only care about presence can use
/// [`SearchOutcome::found`].
#[derive(Debug)]
pub enum SearchOutcome {
    Found(CounterCandidate),
    NoMatch,
    Failed(Error),
}

impl SearchOutcome {
    pub fn found(self) -> Option<CounterCandidate> {
        match self {
            SearchOutcome::Found(candidate) => Some(candidate),
            SearchOutcome::NoMatch | SearchOutcome::Failed(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }
}

#[async_trait]
pub trait CounterArticleSearch: Send + Sync {
    fn name(&self) -> &str;

    /// Find an article about `topic` from a source with the given bias,
    /// published within the last `days` days
    async fn search(&self, topic: &str, bias: Bias, days: i64) -> SearchOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_presence() {
        let candidate = CounterCandidate {
            title: "t".to_string(),
            content: "c".to_string(),
            url: None,
            source: "s".to_string(),
            bias: Bias::Left,
        };
        assert!(SearchOutcome::Found(candidate).found().is_some());
        assert!(SearchOutcome::NoMatch.found().is_none());

        let failed = SearchOutcome::Failed(Error::Search("boom".to_string()));
        assert!(failed.is_failure());
        assert!(failed.found().is_none());
        assert!(!SearchOutcome::NoMatch.is_failure());
    }
}

//! Counter-article search backed by NewsAPI's `everything` endpoint.
//!
//! API: `GET {base}/everything?q&from&to&language&sortBy&apiKey`

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use fs_core::{Bias, Config, CounterArticleSearch, CounterCandidate, Error, Result, SearchOutcome};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};

use crate::sources;

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    source: Option<NewsApiSource>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    #[serde(default)]
    name: Option<String>,
}

pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl NewsApiClient {
    /// Fails when `NEWS_API_KEY` was not configured.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .news_api_key
            .clone()
            .ok_or_else(|| Error::Config("NEWS_API_KEY is not set in the environment.".to_string()))?;

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: config.news_api_base_url.clone(),
        })
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the first relevant article whose source matches `bias`, or
    /// `None` when nothing matched.
    pub async fn search_articles(&self, query: &str, bias: Bias, days: i64) -> Result<Option<CounterCandidate>> {
        let (from, to) = date_range(Utc::now(), days)?;
        debug!("Searching NewsAPI for {:?} ({} to {}, {} sources)", query, from, to, bias);

        let response = self
            .client
            .get(format!("{}/everything", self.base_url))
            .query(&[
                ("q", query),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("language", "en"),
                ("sortBy", "relevancy"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Search(format!("NewsAPI returned {}: {}", status, body.trim())));
        }

        let data = response.json::<NewsApiResponse>().await?;
        select_article(data, bias)
    }
}

/// `[now - days, now]` as `YYYY-MM-DD` strings. Fails when the start date
/// is out of range.
pub fn date_range(now: DateTime<Utc>, days: i64) -> Result<(String, String)> {
    let start = Duration::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| Error::Search(format!("Lookback of {} days is out of range", days)))?;
    Ok((
        start.format("%Y-%m-%d").to_string(),
        now.format("%Y-%m-%d").to_string(),
    ))
}

fn select_article(data: NewsApiResponse, bias: Bias) -> Result<Option<CounterCandidate>> {
    if data.status != "ok" {
        return Err(Error::Search(format!(
            "NewsAPI returned status {:?}: {}",
            data.status,
            data.message.unwrap_or_default()
        )));
    }

    let candidate = data.articles.into_iter().find_map(|article| {
        let source = article.source.and_then(|s| s.name)?;
        if !sources::matches_bias(&source, bias) {
            return None;
        }
        Some(CounterCandidate {
            title: article.title.unwrap_or_default(),
            content: article.description.unwrap_or_default(),
            url: article.url,
            source,
            bias,
        })
    });

    Ok(candidate)
}

#[async_trait]
impl CounterArticleSearch for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn search(&self, topic: &str, bias: Bias, days: i64) -> SearchOutcome {
        match self.search_articles(topic, bias, days).await {
            Ok(Some(candidate)) => {
                info!("📰 Found {} counter-article from {}", bias, candidate.source);
                SearchOutcome::Found(candidate)
            }
            Ok(None) => SearchOutcome::NoMatch,
            Err(e) => SearchOutcome::Failed(e),
        }
    }
}

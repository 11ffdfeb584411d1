use async_trait::async_trait;
use fs_core::{AiAnalysis, Config, Error, InferenceModel, ModelProvider, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::analysis;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEEPSEEK_MODEL: &str = "deepseek-chat";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Client for any OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatModel {
    client: Client,
    name: String,
    api_key: String,
    base_url: String,
    model: String,
    max_content_chars: usize,
}

impl ChatModel {
    pub fn new(
        name: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        max_content_chars: usize,
    ) -> Self {
        Self {
            client: Client::new(),
            name: name.into(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            max_content_chars,
        }
    }

    /// Builds the model for the configured provider. The provider's API key
    /// must be present.
    pub fn from_config(config: &Config) -> Result<Self> {
        let llm = &config.llm;
        let (name, default_base, default_model) = match llm.provider {
            ModelProvider::OpenAi => ("OpenAI", OPENAI_BASE_URL, OPENAI_MODEL),
            ModelProvider::DeepSeek => ("DeepSeek", DEEPSEEK_BASE_URL, DEEPSEEK_MODEL),
            ModelProvider::Dummy => {
                return Err(Error::Config(
                    "The dummy provider does not use a chat endpoint".to_string(),
                ))
            }
        };

        let api_key = llm.api_key.clone().ok_or_else(|| {
            Error::Config(format!(
                "{} is not set in the environment.",
                llm.provider.key_var().unwrap_or("LLM_API_KEY")
            ))
        })?;

        Ok(Self::new(
            name,
            api_key,
            llm.base_url.clone().unwrap_or_else(|| default_base.to_string()),
            llm.model.clone().unwrap_or_else(|| default_model.to_string()),
            config.max_content_chars,
        ))
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    async fn complete(&self, prompt: String) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: analysis::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: 0.3,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "{} returned {}: {}",
                self.name,
                status,
                body.trim()
            )));
        }

        let response = response.json::<ChatResponse>().await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Inference(format!("{} returned no completion", self.name)))?;

        debug!("{} completion: {} chars", self.name, content.len());
        Ok(content)
    }
}

impl fmt::Debug for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatModel")
            .field("name", &self.name)
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl InferenceModel for ChatModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn analyze_article(&self, content: &str) -> Result<AiAnalysis> {
        let completion = self
            .complete(analysis::analysis_prompt(content, self.max_content_chars))
            .await?;
        analysis::parse_analysis(&completion)
    }

    async fn extract_topic(&self, content: &str) -> Result<String> {
        let completion = self
            .complete(analysis::topic_prompt(content, self.max_content_chars))
            .await?;
        analysis::clean_topic(&completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use fs_core::LlmConfig;
    use serde_json::{json, Value};

    async fn serve_completion(status: StatusCode, body: Value) -> String {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move |Json(request): Json<Value>| {
                let body = body.clone();
                async move {
                    assert_eq!(request["messages"][1]["role"], "user");
                    (status, Json(body))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    fn local_model(base_url: String) -> ChatModel {
        ChatModel::new("Test", "test-key", base_url, "test-model", 1000)
            .with_client(Client::builder().no_proxy().build().unwrap())
    }

    fn completion(content: &str) -> Value {
        json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
    }

    fn config_for(provider: ModelProvider, api_key: Option<&str>) -> Config {
        Config {
            llm: LlmConfig {
                provider,
                api_key: api_key.map(str::to_string),
                base_url: None,
                model: None,
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_model_requires_api_key() {
        let result = ChatModel::from_config(&config_for(ModelProvider::OpenAi, None));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Configuration error: OPENAI_API_KEY is not set in the environment."
        );

        let model = ChatModel::from_config(&config_for(ModelProvider::DeepSeek, Some("k"))).unwrap();
        assert_eq!(model.name(), "DeepSeek");
        assert_eq!(model.base_url, DEEPSEEK_BASE_URL);
        assert_eq!(model.model, DEEPSEEK_MODEL);

        assert!(ChatModel::from_config(&config_for(ModelProvider::Dummy, Some("k"))).is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let model = ChatModel::new("OpenAI", "sk-secret", OPENAI_BASE_URL, OPENAI_MODEL, 10);
        let debug = format!("{:?}", model);
        assert!(!debug.contains("sk-secret"));
    }

    #[tokio::test]
    async fn test_analyze_article() {
        let content = r#"{"summary":"S","pros":["a","b","c"],"cons":["d","e","f"]}"#;
        let base_url = serve_completion(StatusCode::OK, completion(content)).await;
        let model = local_model(base_url);

        let analysis = model.analyze_article("Article body").await.unwrap();
        assert_eq!(analysis.summary, "S");
        assert_eq!(analysis.pros, vec!["a", "b", "c"]);
        assert_eq!(analysis.cons, vec!["d", "e", "f"]);
    }

    #[tokio::test]
    async fn test_extract_topic() {
        let base_url = serve_completion(StatusCode::OK, completion("\"Border security bill.\"")).await;
        let model = local_model(base_url);

        assert_eq!(model.extract_topic("Article body").await.unwrap(), "Border security bill");
    }

    #[tokio::test]
    async fn test_error_status_is_inference_error() {
        let base_url = serve_completion(
            StatusCode::UNAUTHORIZED,
            json!({ "error": { "message": "Incorrect API key provided" } }),
        )
        .await;
        let model = local_model(base_url);

        let err = model.analyze_article("Article body").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("401"), "{}", message);
        assert!(message.contains("Incorrect API key"), "{}", message);
    }

    #[tokio::test]
    async fn test_empty_choices_is_error() {
        let base_url = serve_completion(StatusCode::OK, json!({ "choices": [] })).await;
        let model = local_model(base_url);

        let err = model.extract_topic("Article body").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }
}

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::{Error, Result};

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 12_000;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;
pub const MAX_LOOKBACK_DAYS: i64 = 3650;
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:5183",
    "http://localhost:5176",
];

/// Which chat backend answers analysis and topic prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProvider {
    OpenAi,
    DeepSeek,
    Dummy,
}

impl ModelProvider {
    pub fn name(&self) -> &'static str {
        match self {
            ModelProvider::OpenAi => "openai",
            ModelProvider::DeepSeek => "deepseek",
            ModelProvider::Dummy => "dummy",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn key_var(&self) -> Option<&'static str> {
        match self {
            ModelProvider::OpenAi => Some("OPENAI_API_KEY"),
            ModelProvider::DeepSeek => Some("DEEPSEEK_API_KEY"),
            ModelProvider::Dummy => None,
        }
    }
}

impl FromStr for ModelProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ModelProvider::OpenAi),
            "deepseek" => Ok(ModelProvider::DeepSeek),
            "dummy" => Ok(ModelProvider::Dummy),
            other => Err(Error::Config(format!(
                "Unknown model provider: {} (expected openai, deepseek or dummy)",
                other
            ))),
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone)]
pub struct LlmConfig {
    pub provider: ModelProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Process-wide settings, read once at startup and handed to each component.
#[derive(Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub cors_origins: Vec<String>,
    pub news_api_key: Option<String>,
    pub news_api_base_url: String,
    pub llm: LlmConfig,
    pub max_content_chars: usize,
    pub counter_lookback_days: i64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("cors_origins", &self.cors_origins)
            .field("news_api_key", &self.news_api_key.as_deref().map(|_| "<redacted>"))
            .field("news_api_base_url", &self.news_api_base_url)
            .field("llm", &self.llm)
            .field("max_content_chars", &self.max_content_chars)
            .field("counter_lookback_days", &self.counter_lookback_days)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            news_api_key: None,
            news_api_base_url: DEFAULT_NEWS_API_BASE_URL.to_string(),
            llm: LlmConfig {
                provider: ModelProvider::OpenAi,
                api_key: None,
                base_url: None,
                model: None,
            },
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            counter_lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(&[])
    }

    /// Like [`Config::from_env`], with `overrides` taking precedence over the
    /// environment (used for command-line flags).
    pub fn from_env_with(overrides: &[(&str, String)]) -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env: {}", e);
            }
        }
        Self::from_lookup(|key| {
            overrides
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .or_else(|| std::env::var(key).ok())
        })
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let bind_addr = match get("FLIPSIDE_BIND") {
            Some(v) => v
                .parse::<SocketAddr>()
                .map_err(|e| Error::Config(format!("Invalid FLIPSIDE_BIND {}: {}", v, e)))?,
            None => defaults.bind_addr,
        };

        let cors_origins = match get("FLIPSIDE_CORS_ORIGINS") {
            Some(v) => v
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let provider = match get("LLM_PROVIDER") {
            Some(v) => v.parse::<ModelProvider>()?,
            None => defaults.llm.provider,
        };
        let api_key = get("LLM_API_KEY").or_else(|| provider.key_var().and_then(|var| get(var)));

        let max_content_chars = match get("MAX_CONTENT_CHARS") {
            Some(v) => parse_number::<usize>("MAX_CONTENT_CHARS", &v)?,
            None => defaults.max_content_chars,
        };
        if max_content_chars == 0 {
            return Err(Error::Config("MAX_CONTENT_CHARS must be greater than zero".to_string()));
        }

        let counter_lookback_days = match get("COUNTER_LOOKBACK_DAYS") {
            Some(v) => parse_number::<i64>("COUNTER_LOOKBACK_DAYS", &v)?,
            None => defaults.counter_lookback_days,
        };
        if !(0..=MAX_LOOKBACK_DAYS).contains(&counter_lookback_days) {
            return Err(Error::Config(format!(
                "COUNTER_LOOKBACK_DAYS must be between 0 and {}",
                MAX_LOOKBACK_DAYS
            )));
        }

        let news_api_base_url = match get("NEWS_API_BASE_URL") {
            Some(v) => parse_base_url("NEWS_API_BASE_URL", &v)?,
            None => defaults.news_api_base_url,
        };
        let llm_base_url = get("LLM_BASE_URL")
            .map(|v| parse_base_url("LLM_BASE_URL", &v))
            .transpose()?;

        Ok(Self {
            bind_addr,
            cors_origins,
            news_api_key: get("NEWS_API_KEY"),
            news_api_base_url,
            llm: LlmConfig {
                provider,
                api_key,
                base_url: llm_base_url,
                model: get("LLM_MODEL"),
            },
            max_content_chars,
            counter_lookback_days,
        })
    }
}

/// Checks that `value` is an absolute URL and drops any trailing slash.
fn parse_base_url(key: &str, value: &str) -> Result<String> {
    url::Url::parse(value).map_err(|e| Error::InvalidUrl(format!("{} {}: {}", key, value, e)))?;
    Ok(value.trim_end_matches('/').to_string())
}

fn parse_number<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| Error::Config(format!("Invalid {} {}: {}", key, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
        assert_eq!(config.cors_origins.len(), 3);
        assert!(config.news_api_key.is_none());
        assert_eq!(config.news_api_base_url, DEFAULT_NEWS_API_BASE_URL);
        assert_eq!(config.llm.provider, ModelProvider::OpenAi);
        assert_eq!(config.max_content_chars, DEFAULT_MAX_CONTENT_CHARS);
        assert_eq!(config.counter_lookback_days, 7);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FLIPSIDE_BIND", "127.0.0.1:9000"),
            ("FLIPSIDE_CORS_ORIGINS", "https://a.example, https://b.example"),
            ("NEWS_API_KEY", "news-key"),
            ("NEWS_API_BASE_URL", "http://localhost:1234/v2/"),
            ("LLM_PROVIDER", "DeepSeek"),
            ("DEEPSEEK_API_KEY", "ds-key"),
            ("MAX_CONTENT_CHARS", "500"),
            ("COUNTER_LOOKBACK_DAYS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.news_api_key.as_deref(), Some("news-key"));
        assert_eq!(config.news_api_base_url, "http://localhost:1234/v2");
        assert_eq!(config.llm.provider, ModelProvider::DeepSeek);
        assert_eq!(config.llm.api_key.as_deref(), Some("ds-key"));
        assert_eq!(config.max_content_chars, 500);
        assert_eq!(config.counter_lookback_days, 3);
    }

    #[test]
    fn test_provider_key_selection() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "openai-key"),
            ("DEEPSEEK_API_KEY", "ds-key"),
        ]))
        .unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("openai-key"));

        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "openai-key"),
            ("LLM_API_KEY", "generic-key"),
        ]))
        .unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("generic-key"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = Config::from_lookup(lookup(&[("NEWS_API_KEY", "   ")])).unwrap();
        assert!(config.news_api_key.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup(&[("FLIPSIDE_BIND", "nowhere")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LLM_PROVIDER", "gpt")])).is_err());
        assert!(Config::from_lookup(lookup(&[("MAX_CONTENT_CHARS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("MAX_CONTENT_CHARS", "lots")])).is_err());
        assert!(Config::from_lookup(lookup(&[("COUNTER_LOOKBACK_DAYS", "-1")])).is_err());
        assert!(Config::from_lookup(lookup(&[("COUNTER_LOOKBACK_DAYS", "1000000000000")])).is_err());
        assert!(Config::from_lookup(lookup(&[("COUNTER_LOOKBACK_DAYS", "3650")])).is_ok());

        let err = Config::from_lookup(lookup(&[("LLM_BASE_URL", "api.example/v1")])).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = Config::from_lookup(lookup(&[
            ("NEWS_API_KEY", "secret-news"),
            ("OPENAI_API_KEY", "secret-llm"),
        ]))
        .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-news"));
        assert!(!debug.contains("secret-llm"));
        assert!(debug.contains("<redacted>"));
    }
}

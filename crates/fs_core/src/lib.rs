pub mod bias;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod search;
pub mod types;

pub use bias::classify_bias;
pub use config::{Config, LlmConfig, ModelProvider};
pub use error::Error;
pub use extractor::ContentExtractor;
pub use models::InferenceModel;
pub use search::{CounterArticleSearch, SearchOutcome};
pub use types::*;

pub type Result<T> = std::result::Result<T, Error>;

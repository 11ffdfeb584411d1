use fs_core::{Config, InferenceModel, ModelProvider, Result};
use std::sync::Arc;
use tracing::info;

pub mod chat;
pub mod dummy;

pub use chat::ChatModel;
pub use dummy::DummyModel;

/// Builds the inference model selected by the configuration.
pub fn create_model(config: &Config) -> Result<Arc<dyn InferenceModel>> {
    let model: Arc<dyn InferenceModel> = match config.llm.provider {
        ModelProvider::OpenAi | ModelProvider::DeepSeek => Arc::new(ChatModel::from_config(config)?),
        ModelProvider::Dummy => Arc::new(DummyModel::new()),
    };
    info!("🧠 Inference model initialized (using {})", model.name());
    Ok(model)
}

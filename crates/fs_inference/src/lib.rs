pub mod analysis;
pub mod models;

pub use models::create_model;

pub mod prelude {
    pub use super::models::create_model;
    pub use super::models::chat::ChatModel;
    pub use super::models::dummy::DummyModel;
    pub use fs_core::{AiAnalysis, InferenceModel, Result, Error};
}

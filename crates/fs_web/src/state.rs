use std::sync::Arc;
use crate::pipeline::AnalysisPipeline;

pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
}

impl AppState {
    pub fn new(pipeline: AnalysisPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

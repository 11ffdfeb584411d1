use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use fs_core::{AnalysisRequest, AnalysisResponse};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use crate::error::ApiError;
use crate::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to FlipSide API" }))
}

/// Analyze a news article and look for a counter-article from the other side.
pub async fn analyze_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(request) = payload?;

    match state.pipeline.analyze(&request.url).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("❌ Analysis of {} failed: {}", request.url, e);
            Err(e.into())
        }
    }
}

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use fs_core::{Config, Error, Result};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod state;

pub use error::ApiError;
pub use pipeline::AnalysisPipeline;
pub use state::AppState;

/// CORS for a fixed list of origins with credentials. Credentials rule out
/// wildcards, so methods and headers are mirrored from the request.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| Error::Config(format!("Invalid CORS origin {}: {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn create_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/analyze", post(handlers::analyze_article))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let app = create_app(state, cors_layer(&config.cors_origins)?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("🚀 FlipSide API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 FlipSide API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

pub mod prelude {
    pub use fs_core::{AnalysisResponse, Result, Error};
    pub use crate::{AnalysisPipeline, AppState};
}

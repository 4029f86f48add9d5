mod auth;
pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OpenAiClientFactory};
use axum::{Router, middleware, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use handlers::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(handlers::generate))
        .route("/medical-summary", post(handlers::medical_summary))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_caller_identity,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let state = AppState {
        clients: Arc::new(OpenAiClientFactory::new(config.llm.clone())),
        config: Arc::new(config),
    };

    let app = router(state.clone());

    // Start server
    let addr = SocketAddr::new(
        state.config.server.host.parse()?,
        state.config.server.port,
    );

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

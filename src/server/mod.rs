pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, ServerConfig},
    proxy::ModelPolicy,
    upstream::OpenAiUpstream,
};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the application router: `POST /chat` behind permissive CORS,
/// access-log tracing, and an in-process concurrency cap.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    // All origins, all methods, all headers, on error responses too
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(config.throttle.max_concurrency))
        .layer(cors)
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the upstream client and the fixed request policy
    let upstream = OpenAiUpstream::new(config.upstream.clone())?;
    let policy = ModelPolicy {
        model: config.upstream.model.clone(),
        temperature: config.upstream.temperature,
    };

    // Create application state
    let app_state = AppState {
        upstream: Arc::new(upstream),
        policy: Arc::new(policy),
    };

    let app = router(app_state, &config.server);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

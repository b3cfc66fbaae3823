//! HTTP service for the classifier
//!
//! Wires the shared application state into an axum router with two routes:
//! `POST /predict` for classification and `GET /health` for liveness.

mod error;
mod routes;
mod state;

pub use error::ServerError;
pub use routes::{HealthResponse, PredictResponse};
pub use state::{AppState, SharedState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the service router around the shared state
pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(routes::predict))
        .route("/health", get(routes::health_check))
        // Uploads are not size-validated; the whole body lands in memory
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: SharedState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

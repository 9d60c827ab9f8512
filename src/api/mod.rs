use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::orchestrator::Orchestrator;

pub mod handlers;
pub mod models;

pub fn create_router(orchestrator: Arc<Orchestrator>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/query", post(handlers::query_handler))
        .route("/followup", post(handlers::followup_handler))
        .with_state(orchestrator)
        // Static file serving for the UI
        .nest_service("/", ServeDir::new("static"))
        .layer(cors)
}

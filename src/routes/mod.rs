//! HTTP routes for the review service
//!
//! This module defines all HTTP endpoints exposed by the backend.

pub mod health;
pub mod metrics;
pub mod review;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{docs::ReviewApiDoc, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // The frontend is served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/review", post(review::review))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .route("/openapi.json", get(openapi_json));

    let router = match &state.config.static_dir {
        Some(dir) => api_routes.fallback_service(ServeDir::new(dir)),
        None => api_routes,
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

/// OpenAPI document for the service
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ReviewApiDoc::openapi())
}

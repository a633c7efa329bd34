//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Dataset ingestion
        .route("/datasets", post(handlers::upload_dataset))
        .route("/datasets/current", get(handlers::get_dataset_info))
        // Aggregate views
        .route("/statistics", get(handlers::get_statistics))
        .route("/municipalities", get(handlers::get_municipalities))
        .route("/municipalities/comparison", get(handlers::get_comparison))
        .route("/municipalities/{city}", get(handlers::get_municipality))
        .route("/temporal/{city}", get(handlers::get_temporal_series))
        .route("/demographics/{kind}", get(handlers::get_demographics))
        .route("/histogram", get(handlers::get_histogram))
        .route("/export", get(handlers::export_dataset));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Allow large record batches during uploads.
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

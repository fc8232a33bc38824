//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Info & health
        .route("/", get(handlers::api_info))
        .route("/api/health", get(handlers::health_check))
        .route("/api/health/ready", get(handlers::readiness_check))
        // Options
        .route(
            "/api/options",
            get(handlers::list_options).post(handlers::create_option),
        )
        .route(
            "/api/options/{id}",
            get(handlers::get_option)
                .put(handlers::update_option)
                .delete(handlers::delete_option),
        )
        .route(
            "/api/options/symbol/{symbol}",
            get(handlers::list_options_by_symbol),
        )
        .route(
            "/api/options/type/{type}",
            get(handlers::list_options_by_type),
        )
        .with_state(state)
}

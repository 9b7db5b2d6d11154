//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::home))
        .route("/weather", get(handlers::weather::get_weather))
        .route("/health", get(handlers::health::health_check))
        // Unmatched requests still answer in JSON
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(RequestIdLayer::new())
        .with_state(state)
}

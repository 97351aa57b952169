//! HTTP API handlers and routing.

pub mod error;
mod health;
mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Create the main API router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health endpoints
        .merge(health::routes())
        // URN endpoints
        .nest("/api", routes::routes())
        .layer(TraceLayer::new_for_http());

    let router = if state.cors_permissive() {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    };

    router.with_state(state)
}

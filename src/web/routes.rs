use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // API endpoints
        .route("/stream", get(super::handlers::stream::stream_typewriter))
        .route("/send", post(super::handlers::send::send_message))
        // Health check
        .route("/health", get(super::handlers::health::health_check))
        .with_state(state)
}

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::state::AppState;
use crate::ws;

/// Build the application router with its real-time websocket layer attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/ws", get(ws::ws_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

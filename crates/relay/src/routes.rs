//! HTTP routes

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::websocket::{state::RelayStats, ws_handler, WebSocketState};

/// Build the relay router
pub fn router(ws_state: WebSocketState) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ws_state)
}

/// Liveness plus connection statistics
async fn health(State(ws_state): State<WebSocketState>) -> Json<RelayStats> {
    Json(ws_state.get_stats().await)
}

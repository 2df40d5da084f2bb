use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::api::handler::{
    fallback_handler, health_handler, verify_json_handler, verify_live_page_handler,
    verify_page_handler, verify_page_missing_handler,
};
use crate::api::ws::websocket_handler;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/verify", get(verify_page_missing_handler))
        .route("/verify/", get(verify_page_missing_handler))
        .route("/verify/{id}", get(verify_page_handler))
        .route("/verify/{id}/live", get(verify_live_page_handler))
        .route("/verify/{id}/ws", get(websocket_handler))
        .route("/api/verify/{id}", get(verify_json_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{Json, Router, routing::get};

use marquee_core::ApiMessage;

use crate::state::AppState;

/// Liveness probe. Never touches the database or the auth gate.
pub async fn health() -> Json<ApiMessage> {
    Json(ApiMessage::ok("ok"))
}

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn speech_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/tts", post(handlers::tts))
        .route("/say", get(handlers::say))
        .with_state(state)
}

use std::sync::Arc;

use axum::{
    response::Html,
    routing::get,
    Router,
};

use appointment_cell::router::appointment_routes;
use shared_config::AppConfig;
use speech_cell::router::speech_routes;

use crate::pages;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(appointment_routes(state.clone()))
        .merge(speech_routes(state))
}

/// Kiosk home screen: scan field, keypad and the auto-booking script.
async fn home() -> Html<&'static str> {
    Html(pages::INDEX_HTML)
}

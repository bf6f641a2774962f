use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

/// Booking and slip routes. The kiosk runs unauthenticated on a trusted
/// intranet, so there is no auth layer here.
pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/book_appointment", post(handlers::book_appointment))
        .route("/print_slip/{appointment_id}", get(handlers::print_slip))
        .with_state(state)
}

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::AppointmentError;
use crate::services::booking::AppointmentBookingService;
use crate::services::slip::{render_slip_page, SlipService};

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub cr_number: String,
}

/// POST /book_appointment. The kiosk submits the scanned CR number as a
/// classic form field; everything else is derived server-side.
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppConfig>>,
    Form(form): Form<BookingForm>,
) -> Result<Json<Value>, AppError> {
    let cr_number = form.cr_number.trim();
    if cr_number.is_empty() {
        return Err(AppError::Validation("CR Number is required".to_string()));
    }

    let booking_service = AppointmentBookingService::new(&state);

    let confirmation = booking_service.book(cr_number).await.map_err(|e| match e {
        AppointmentError::PatientNotFound => {
            AppError::NotFound("Invalid CR Number. Please contact helpdesk.".to_string())
        }
        AppointmentError::RevisitExpired => AppError::Expired,
        AppointmentError::Database(msg) => AppError::Database(msg),
        _ => AppError::Internal(e.to_string()),
    })?;

    Ok(Json(json!(confirmation)))
}

/// GET /print_slip/{appointment_id}. Unknown or broken slips bounce back to
/// the home screen instead of stranding the kiosk on an error page.
#[axum::debug_handler]
pub async fn print_slip(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<i64>,
) -> Result<Response, AppError> {
    let slip_service = SlipService::new(&state);

    let slip = slip_service
        .fetch_slip(appointment_id)
        .await
        .map_err(|e| match e {
            AppointmentError::Database(msg) => AppError::Database(msg),
            _ => AppError::Internal(e.to_string()),
        })?;

    match slip {
        Some(slip) => Ok(Html(render_slip_page(&slip)).into_response()),
        None => Ok(Redirect::to("/").into_response()),
    }
}
